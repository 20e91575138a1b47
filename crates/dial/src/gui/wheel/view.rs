use super::{FONT_FAMILY, STRIKE_WIDTH};
use crate::gui::theme::ThemeColors;
use cairo::Context;
use palette::Srgba;
use rotor::Item;
use rotor::angle::FontWeight;
use rotor::layout::{ItemLayout, Point};

struct ItemRenderer<'a> {
    item: &'a Item,
    layout: &'a ItemLayout,
    center: Point,
}

impl<'a> ItemRenderer<'a> {
    fn new(item: &'a Item, layout: &'a ItemLayout, center: Point) -> Self {
        Self {
            item,
            layout,
            center,
        }
    }

    fn draw(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let position = self.center.offset(self.layout.offset);
        let text = self.item.name.as_str();

        cr.save()?;
        cr.translate(position.x, position.y);
        cr.rotate(self.layout.text_rotation);
        cr.select_font_face(FONT_FAMILY, cairo::FontSlant::Normal, self.cairo_weight());
        cr.set_font_size(self.layout.font_size);

        let (r, g, b, a) = self.color(colors).into_components();
        cr.set_source_rgba(r, g, b, a * self.layout.opacity);

        let ext = cr.text_extents(text)?;
        let (x, y) = (-ext.width() / 2.0 - ext.x_bearing(), ext.height() / 2.0);
        cr.move_to(x, y);
        cr.show_text(text)?;

        if self.item.checked {
            // strike through the middle of the glyphs
            let strike_y = y + ext.y_bearing() + ext.height() / 2.0;
            cr.set_line_width(STRIKE_WIDTH);
            cr.move_to(x, strike_y);
            cr.line_to(x + ext.width(), strike_y);
            cr.stroke()?;
        }
        cr.restore()
    }

    fn cairo_weight(&self) -> cairo::FontWeight {
        match self.layout.font_weight {
            FontWeight::Bold | FontWeight::Semibold => cairo::FontWeight::Bold,
            FontWeight::Medium | FontWeight::Regular => cairo::FontWeight::Normal,
        }
    }

    fn color(&self, colors: &ThemeColors) -> Srgba<f64> {
        if self.item.checked {
            colors.checked
        } else {
            colors.text
        }
    }
}

/// Paints the visible part of the wheel for `items`, which are in storage order.
pub fn draw(
    cr: &Context,
    items: &[Item],
    layouts: &[ItemLayout],
    center: Point,
    row_height: f64,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    draw_background(cr, colors)?;
    draw_center_marker(cr, center, row_height, colors)?;

    for layout in layouts {
        if let Some(item) = items.get(layout.storage_index) {
            ItemRenderer::new(item, layout, center).draw(cr, colors)?;
        }
    }
    Ok(())
}

fn draw_background(cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
    let (r, g, b, a) = colors.background.into_components();
    cr.set_source_rgba(r, g, b, a);
    cr.paint()
}

/// Faint band behind the centered row, marking the tap target.
fn draw_center_marker(
    cr: &Context,
    center: Point,
    row_height: f64,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    let (r, g, b, a) = colors.center_marker.into_components();
    cr.set_source_rgba(r, g, b, a);
    cr.rectangle(0.0, center.y - row_height / 2.0, center.x, row_height);
    cr.fill()
}
