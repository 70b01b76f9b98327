//! # Layout Generator
//!
//! Partitions the container into a sparse grid of square cells and places at
//! most one marker per populated cell. Every call produces a fresh, valid
//! layout; positions are randomized per call, so the caller decides how
//! reproducible a layout is through the random source it passes in.
//!
//! ## Algorithm
//!
//! 1. `cols = ceil(width / cell_edge)`, `rows = ceil(height / cell_edge)`
//! 2. Visit cells row by row, skipping each with probability `skip_probability`
//! 3. Stop as soon as every catalog entry has been placed once
//! 4. Per surviving cell draw a [`SizeClass`] and place the marker inside the
//!    cell, keeping the class's edge margin
//! 5. Draw the per-marker motion parameters

use crate::config::BackdropConfig;
use crate::easing::Easing;
use crate::error::Result;
use crate::model::{MarkerSpec, MarkerState, PathParams, Point, SizeClass, Transform};
use rand::Rng;
use shared::TokenMeta;
use std::f32::consts::TAU;
use tracing::debug;

const SCALE_VARIATION: (f32, f32) = (0.9, 1.1);
const START_DELAY_SECS: (f32, f32) = (0.0, 3.0);
const PATH_AMPLITUDE: (f32, f32) = (0.2, 0.5);
const PATH_FREQUENCY: (f32, f32) = (0.2, 0.5);
const PATH_PHASE: (f32, f32) = (0.0, TAU);
const CHANGE_PCT: (f32, f32) = (-10.0, 10.0);
/// Jitter applied to the duration-derived time increment so equal-duration
/// markers still drift out of phase
const SPEED_JITTER: (f32, f32) = (0.85, 1.15);

/// Grid dimensions for one container size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDims {
    pub cols: u32,
    pub rows: u32,
}

impl GridDims {
    /// Compute the grid covering a `width` x `height` container.
    ///
    /// Returns `None` when the container has no measurable area.
    pub fn for_container(width: f32, height: f32, cell_edge: f32) -> Option<Self> {
        let measurable = |v: f32| v.is_finite() && v > 0.0;
        if !measurable(width) || !measurable(height) || !measurable(cell_edge) {
            return None;
        }

        Some(Self {
            cols: (width / cell_edge).ceil() as u32,
            rows: (height / cell_edge).ceil() as u32,
        })
    }

    pub fn cell_count(&self) -> u64 {
        u64::from(self.cols) * u64::from(self.rows)
    }
}

/// Produces marker sets for a container size.
#[derive(Debug, Clone)]
pub struct LayoutGenerator {
    cell_edge: f32,
    skip_probability: f64,
    reference_fps: f32,
}

impl LayoutGenerator {
    /// Build a generator, rejecting a configuration that fails
    /// [`BackdropConfig::validate`]
    pub fn new(config: &BackdropConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            cell_edge: config.cell_edge,
            skip_probability: config.skip_probability,
            reference_fps: config.reference_fps,
        })
    }

    /// Generate a new marker set for a `width` x `height` container.
    ///
    /// A container without measurable size yields an empty set. Marker ids
    /// are the catalog index of the token they show, so they are unique
    /// within one pass.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        width: f32,
        height: f32,
        catalog: &[TokenMeta],
        rng: &mut R,
    ) -> Vec<MarkerState> {
        let Some(grid) = GridDims::for_container(width, height, self.cell_edge) else {
            debug!(width, height, "Container has no measurable size, empty layout");
            return Vec::new();
        };

        let cells = usize::try_from(grid.cell_count()).unwrap_or(usize::MAX);
        let mut markers = Vec::with_capacity(catalog.len().min(cells));

        'cells: for row in 0..grid.rows {
            for col in 0..grid.cols {
                if markers.len() >= catalog.len() {
                    break 'cells;
                }
                if rng.random_bool(self.skip_probability) {
                    continue;
                }

                let origin = Point::new(col as f32 * self.cell_edge, row as f32 * self.cell_edge);
                let token = &catalog[markers.len()];
                markers.push(self.place(markers.len() as u32, token, origin, rng));
            }
        }

        debug!(
            cols = grid.cols,
            rows = grid.rows,
            placed = markers.len(),
            catalog = catalog.len(),
            "Generated layout"
        );

        markers
    }

    /// Create one marker inside the cell whose top-left corner is `origin`
    fn place<R: Rng + ?Sized>(
        &self,
        id: u32,
        token: &TokenMeta,
        origin: Point,
        rng: &mut R,
    ) -> MarkerState {
        let size_class = SizeClass::pick(rng);
        let profile = size_class.profile();
        let base_size = sample(rng, profile.base_size);

        // Free room left once margins and the marker itself are accounted for
        let span = (self.cell_edge - 2.0 * profile.edge_margin - base_size).max(0.0);
        let half = base_size / 2.0;
        let anchor = Point::new(
            origin.x + profile.edge_margin + half + sample(rng, (0.0, span)),
            origin.y + profile.edge_margin + half + sample(rng, (0.0, span)),
        );

        let duration_secs = sample(rng, profile.duration_secs);
        let time_increment = f64::from(TAU / (duration_secs * self.reference_fps))
            * f64::from(sample(rng, SPEED_JITTER));
        let delay_secs = sample(rng, START_DELAY_SECS);
        let scale_variation = sample(rng, SCALE_VARIATION);

        MarkerState {
            spec: MarkerSpec {
                id,
                name: token.name.clone(),
                symbol: token.symbol.clone(),
                color: token.color,
                change_24h: sample(rng, CHANGE_PCT),
            },
            anchor,
            size_class,
            base_size,
            scale_variation,
            delay_secs,
            delay_remaining: delay_secs,
            float_distance: sample(rng, profile.float_distance),
            time_increment,
            direction: if rng.random_bool(0.5) { 1.0 } else { -1.0 },
            path: PathParams {
                amplitude: sample(rng, PATH_AMPLITUDE),
                frequency: sample(rng, PATH_FREQUENCY),
                phase: sample(rng, PATH_PHASE),
            },
            time: 0.0,
            is_frozen: false,
            easing: Easing::pick(rng),
            transform: Transform::at_rest(anchor, scale_variation),
        }
    }
}

/// Uniform draw from `[lo, hi)`; degenerate ranges return `lo`
fn sample<R: Rng + ?Sized>(rng: &mut R, (lo, hi): (f32, f32)) -> f32 {
    if hi > lo {
        rng.random_range(lo..hi)
    } else {
        lo
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use crate::error::AppError;
    use crate::model::MIN_CELL_EDGE;
    use shared::{default_catalog, CATALOG_SIZE};

    fn generator() -> LayoutGenerator {
        LayoutGenerator::new(&BackdropConfig::default()).unwrap()
    }

    fn generator_with(cell_edge: f32, skip_probability: f64) -> LayoutGenerator {
        let config = BackdropConfig {
            cell_edge,
            skip_probability,
            ..Default::default()
        };
        LayoutGenerator::new(&config).unwrap()
    }

    fn assert_inside_cell(marker: &MarkerState, cell_edge: f32) {
        let margin = marker.size_class.profile().edge_margin;
        let half = marker.base_size / 2.0;
        let cell_x = (marker.anchor.x / cell_edge).floor() * cell_edge;
        let cell_y = (marker.anchor.y / cell_edge).floor() * cell_edge;
        assert!(marker.anchor.x - half >= cell_x + margin - 1e-3);
        assert!(marker.anchor.x + half <= cell_x + cell_edge - margin + 1e-3);
        assert!(marker.anchor.y - half >= cell_y + margin - 1e-3);
        assert!(marker.anchor.y + half <= cell_y + cell_edge - margin + 1e-3);
    }

    #[test]
    fn test_grid_for_reference_container() {
        let grid = GridDims::for_container(1200.0, 800.0, 300.0).unwrap();
        assert_eq!(grid, GridDims { cols: 4, rows: 3 });
        assert_eq!(grid.cell_count(), 12);
    }

    #[test]
    fn test_grid_rounds_partial_cells_up() {
        let grid = GridDims::for_container(301.0, 10.0, 300.0).unwrap();
        assert_eq!(grid, GridDims { cols: 2, rows: 1 });
    }

    #[test]
    fn test_tiny_cell_edge_grid_does_not_overflow() {
        let grid = GridDims::for_container(1000.0, 1000.0, 0.01).unwrap();
        assert_eq!(grid.cell_count(), 10_000_000_000);

        let huge = GridDims::for_container(f32::MAX, f32::MAX, 1.0).unwrap();
        assert_eq!(huge.cols, u32::MAX);
        assert_eq!(huge.cell_count(), u64::from(u32::MAX) * u64::from(u32::MAX));
    }

    #[test]
    fn test_zero_size_yields_empty_layout() {
        let mut rng = StdRng::seed_from_u64(1);
        let catalog = default_catalog();
        assert!(generator().generate(0.0, 800.0, &catalog, &mut rng).is_empty());
        assert!(generator().generate(1200.0, 0.0, &catalog, &mut rng).is_empty());
        assert!(generator().generate(-5.0, 10.0, &catalog, &mut rng).is_empty());
        assert!(generator().generate(f32::NAN, 10.0, &catalog, &mut rng).is_empty());
    }

    #[test]
    fn test_reference_container_never_exceeds_cell_count() {
        let catalog = default_catalog();
        let generator = generator();
        let mut total = 0usize;
        for seed in 0..500 {
            let mut rng = StdRng::seed_from_u64(seed);
            let markers = generator.generate(1200.0, 800.0, &catalog, &mut rng);
            assert!(markers.len() <= 12);
            total += markers.len();
        }
        let mean = total as f64 / 500.0;
        assert!((mean - 3.6).abs() < 0.5, "mean markers per pass {}", mean);
    }

    #[test]
    fn test_population_capped_at_catalog_size() {
        // No skipping and far more cells than catalog entries
        let generator = generator_with(MIN_CELL_EDGE, 0.0);
        let catalog = default_catalog();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let markers = generator.generate(4000.0, 4000.0, &catalog, &mut rng);
            assert_eq!(markers.len(), CATALOG_SIZE);
        }

        let short = &catalog[..3];
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(generator.generate(4000.0, 4000.0, short, &mut rng).len(), 3);
    }

    #[test]
    fn test_catalog_entries_not_reused() {
        let generator = generator_with(MIN_CELL_EDGE, 0.0);
        let catalog = default_catalog();
        let mut rng = StdRng::seed_from_u64(3);
        let markers = generator.generate(4000.0, 4000.0, &catalog, &mut rng);

        for (index, marker) in markers.iter().enumerate() {
            assert_eq!(marker.id(), index as u32);
            assert_eq!(marker.spec.symbol, catalog[index].symbol);
        }
    }

    #[test]
    fn test_markers_stay_inside_their_cell() {
        let generator = generator();
        let catalog = default_catalog();
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            for marker in generator.generate(1200.0, 900.0, &catalog, &mut rng) {
                assert_inside_cell(&marker, 300.0);
            }
        }
    }

    #[test]
    fn test_minimum_cell_edge_keeps_markers_in_cell() {
        let generator = generator_with(MIN_CELL_EDGE, 0.0);
        let catalog = default_catalog();
        let mut large = 0;
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let markers = generator.generate(1000.0, 1000.0, &catalog, &mut rng);
            assert_eq!(markers.len(), CATALOG_SIZE);
            for marker in &markers {
                assert_inside_cell(marker, MIN_CELL_EDGE);
                if marker.size_class == SizeClass::Large {
                    large += 1;
                }
            }
        }
        assert!(large > 0, "no large marker drawn");
    }

    #[test]
    fn test_marker_parameters_within_ranges() {
        let generator = generator_with(MIN_CELL_EDGE, 0.0);
        let catalog = default_catalog();
        let mut rng = StdRng::seed_from_u64(11);
        for marker in generator.generate(2000.0, 2000.0, &catalog, &mut rng) {
            let profile = marker.size_class.profile();
            assert!(marker.base_size >= profile.base_size.0);
            assert!(marker.base_size < profile.base_size.1);
            assert!((0.9..1.1).contains(&marker.scale_variation));
            assert!((0.0..3.0).contains(&marker.delay_secs));
            assert_eq!(marker.delay_remaining, marker.delay_secs);
            assert!(marker.direction == 1.0 || marker.direction == -1.0);
            assert!(marker.time_increment > 0.0);
            assert_eq!(marker.time, 0.0);
            assert!(!marker.is_frozen);
            assert_eq!(marker.transform.translate, marker.anchor);
            assert!((-10.0..10.0).contains(&marker.spec.change_24h));
        }
    }

    #[test]
    fn test_same_seed_reproduces_layout() {
        let catalog = default_catalog();
        let a = generator().generate(1500.0, 900.0, &catalog, &mut StdRng::seed_from_u64(99));
        let b = generator().generate(1500.0, 900.0, &catalog, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let reject = |config: BackdropConfig| {
            assert!(matches!(LayoutGenerator::new(&config), Err(AppError::Config(_))));
        };
        reject(BackdropConfig {
            cell_edge: 0.01,
            ..Default::default()
        });
        reject(BackdropConfig {
            cell_edge: MIN_CELL_EDGE - 0.5,
            ..Default::default()
        });
        reject(BackdropConfig {
            skip_probability: 1.0,
            ..Default::default()
        });
        reject(BackdropConfig {
            reference_fps: 0.0,
            ..Default::default()
        });
        assert!(LayoutGenerator::new(&BackdropConfig::default()).is_ok());
    }
}
