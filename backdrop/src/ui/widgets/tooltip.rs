//! # Marker Tooltip
//!
//! Floating card next to a hovered or focused marker. Drawn in its own
//! tooltip-ordered [`egui::Area`], so it never takes space in the container.

use crate::ui::theme::Theme;
use egui::{pos2, Context, Id, Order, Pos2, Rect, RichText, Vec2};
use lib_core::TooltipModel;

/// Gap between the marker edge and the card
const GAP: f32 = 8.0;
/// Card size used to keep it inside the container
const ESTIMATED_SIZE: Vec2 = Vec2::new(180.0, 64.0);

/// Top-left corner of the card: right of the marker, flipped left near the edge
pub fn placement(container: Rect, model: &TooltipModel) -> Pos2 {
    let center = container.min + egui::vec2(model.anchor.x, model.anchor.y);
    let half = model.size / 2.0;

    let mut x = center.x + half + GAP;
    if x + ESTIMATED_SIZE.x > container.max.x {
        x = center.x - half - GAP - ESTIMATED_SIZE.x;
    }
    let y = (center.y - half).clamp(container.min.y, (container.max.y - ESTIMATED_SIZE.y).max(container.min.y));

    pos2(x.max(container.min.x), y)
}

/// Show the tooltip card for `model`
pub fn show(ctx: &Context, container: Rect, model: &TooltipModel, theme: &Theme) {
    egui::Area::new(Id::new(("marker-tooltip", model.id)))
        .order(Order::Tooltip)
        .fixed_pos(placement(container, model))
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style())
                .fill(theme.colors.surface)
                .stroke(egui::Stroke::new(1.0, theme.colors.border))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(&model.name).strong());
                        ui.label(RichText::new(&model.symbol).color(theme.colors.text_dim));
                    });
                    ui.label(
                        RichText::new(format!("24h {}", model.change_label))
                            .color(theme.change_color(model.sentiment)),
                    );
                });
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_core::{ChangeSentiment, Point};

    fn model(x: f32, y: f32) -> TooltipModel {
        TooltipModel {
            id: 0,
            name: "Ethereum".to_string(),
            symbol: "ETH".to_string(),
            change_label: "+1.00%".to_string(),
            sentiment: ChangeSentiment::NonNegative,
            anchor: Point::new(x, y),
            size: 40.0,
        }
    }

    fn container() -> Rect {
        Rect::from_min_size(pos2(0.0, 0.0), egui::vec2(1200.0, 800.0))
    }

    #[test]
    fn test_placed_right_of_marker() {
        let pos = placement(container(), &model(300.0, 300.0));
        assert_eq!(pos, pos2(328.0, 280.0));
    }

    #[test]
    fn test_flips_left_near_right_edge() {
        let pos = placement(container(), &model(1150.0, 300.0));
        assert!(pos.x + ESTIMATED_SIZE.x <= 1150.0 - 20.0);
    }

    #[test]
    fn test_stays_inside_vertically() {
        let pos = placement(container(), &model(300.0, 10.0));
        assert_eq!(pos.y, 0.0);
        let pos = placement(container(), &model(300.0, 795.0));
        assert!(pos.y + ESTIMATED_SIZE.y <= 800.0);
    }
}
