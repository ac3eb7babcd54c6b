use crate::config::{IconConfig, Label};
use crate::render::{Anchor, Color, DisplayItem, RenderList};

fn label_run(label: &Label, color: Color) -> DisplayItem {
    DisplayItem::TextRun {
        x: label.x,
        y: label.y,
        text: label.text.clone(),
        size: label.size,
        color,
        anchor: Anchor::MIDDLE,
    }
}

/// Builds the icon: transparent background, the shield, then both labels on top.
pub fn shield_icon(config: &IconConfig) -> RenderList {
    let mut list = RenderList::new();

    list.add_command(DisplayItem::Clear {
        color: Color::TRANSPARENT,
    });
    list.add_command(DisplayItem::Polygon {
        points: config.shield.points.clone(),
        fill: config.shield.fill,
        outline: Some(config.shield.outline),
        stroke_width: config.shield.stroke_width,
    });
    list.add_command(label_run(&config.title, config.text_color));
    list.add_command(label_run(&config.subtitle, config.text_color));

    list
}
