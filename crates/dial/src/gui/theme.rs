use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;

pub struct ThemeColors {
    pub text: Srgba<f64>,
    pub checked: Srgba<f64>,
    pub background: Srgba<f64>,
    pub center_marker: Srgba<f64>,
}

impl ThemeColors {
    pub fn from_context(context: &gtk::StyleContext) -> Self {
        Self {
            text: Self::lookup_color(
                context,
                "dial_text_color",
                Srgba::new(1.0, 0.84, 0.0, 1.0),
                None,
            ),
            checked: Self::lookup_color(
                context,
                "dial_checked_color",
                Srgba::new(0.55, 0.47, 0.1, 1.0),
                None,
            ),
            background: Self::lookup_color(
                context,
                "dial_bg_color",
                Srgba::new(0.0, 0.0, 0.0, 1.0),
                Some(1.0),
            ),
            center_marker: Self::lookup_color(
                context,
                "dial_text_color",
                Srgba::new(1.0, 0.84, 0.0, 0.12),
                Some(0.12),
            ),
        }
    }

    fn lookup_color(
        context: &gtk::StyleContext,
        name: &str,
        fallback: Srgba<f64>,
        alpha_override: Option<f64>,
    ) -> Srgba<f64> {
        context
            .lookup_color(name)
            .map(|c| {
                let (r, g, b, a) = (
                    c.red() as f64,
                    c.green() as f64,
                    c.blue() as f64,
                    c.alpha() as f64,
                );
                Srgba::new(r, g, b, alpha_override.unwrap_or(a))
            })
            .unwrap_or(fallback)
    }
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
@define-color dial_text_color #ffd600;
@define-color dial_checked_color #8c7819;
@define-color dial_bg_color #000000;

.dial-window, .dial-drawing-area {
    background-color: @dial_bg_color;
}

.dial-controls button {
    color: @dial_text_color;
    background: none;
    border: none;
    box-shadow: none;
    min-width: 56px;
    min-height: 56px;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
