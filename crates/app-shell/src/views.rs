use zoon::*;

fn primary_text_color() -> Rgba {
    color!("#1f2433")
}

fn muted_text_color() -> Rgba {
    color!("rgba(31, 36, 51, 0.6)")
}

/// Child views composed by the shell. Neither takes props.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    /// Routed content for `/`.
    Tokens,
    /// Rendered on every location.
    Footer,
}

impl View {
    pub fn name(self) -> &'static str {
        match self {
            Self::Tokens => "tokens",
            Self::Footer => "footer",
        }
    }

    pub fn render(self) -> RawElOrText {
        match self {
            Self::Tokens => tokens().unify(),
            Self::Footer => footer().unify(),
        }
    }
}

fn tokens() -> impl Element {
    El::new()
        .s(Width::fill())
        .s(Padding::all(16))
        .s(Font::new().size(18).weight(FontWeight::SemiBold).color(primary_text_color()))
        .update_raw_el(|raw_el| raw_el.attr("data-view", View::Tokens.name()))
        .child("Tokens")
}

fn footer() -> impl Element {
    El::new()
        .s(Width::fill())
        .s(Padding::new().x(16).y(10))
        .s(Font::new().size(13).color(muted_text_color()))
        .update_raw_el(|raw_el| raw_el.attr("data-view", View::Footer.name()))
        .child("Footer")
}
