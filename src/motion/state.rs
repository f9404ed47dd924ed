use std::fmt::Write;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CssProperty {
    Opacity,
    Transform,
    BoxShadow,
}

impl CssProperty {
    pub const ALL: [CssProperty; 3] = [
        CssProperty::Opacity,
        CssProperty::Transform,
        CssProperty::BoxShadow,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CssProperty::Opacity => "opacity",
            CssProperty::Transform => "transform",
            CssProperty::BoxShadow => "box-shadow",
        }
    }
}

// `None` means the layer leaves that property alone
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VisualState {
    pub opacity: Option<f64>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub scale: Option<f64>,
    pub box_shadow: Option<&'static str>,
}

impl VisualState {
    pub const EMPTY: Self = Self {
        opacity: None,
        x: None,
        y: None,
        scale: None,
        box_shadow: None,
    };

    pub const fn new() -> Self {
        Self::EMPTY
    }

    pub const fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub const fn x(mut self, x: f64) -> Self {
        self.x = Some(x);
        self
    }

    pub const fn y(mut self, y: f64) -> Self {
        self.y = Some(y);
        self
    }

    pub const fn scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    pub const fn box_shadow(mut self, shadow: &'static str) -> Self {
        self.box_shadow = Some(shadow);
        self
    }

    // x, y and scale all land in the one `transform` property
    pub fn sets(&self, property: CssProperty) -> bool {
        match property {
            CssProperty::Opacity => self.opacity.is_some(),
            CssProperty::Transform => {
                self.x.is_some() || self.y.is_some() || self.scale.is_some()
            }
            CssProperty::BoxShadow => self.box_shadow.is_some(),
        }
    }

    /// Lays `top` over `self`: properties set in `top` win.
    pub fn overlay(self, top: &VisualState) -> Self {
        Self {
            opacity: top.opacity.or(self.opacity),
            x: top.x.or(self.x),
            y: top.y.or(self.y),
            scale: top.scale.or(self.scale),
            box_shadow: top.box_shadow.or(self.box_shadow),
        }
    }

    // Unset properties get neutral values so transitions have both endpoints
    pub fn to_css(&self) -> String {
        let mut css = format!(
            "opacity: {}; transform: translate3d({}px, {}px, 0) scale({});",
            self.opacity.unwrap_or(1.0),
            self.x.unwrap_or(0.0),
            self.y.unwrap_or(0.0),
            self.scale.unwrap_or(1.0),
        );
        if let Some(shadow) = self.box_shadow {
            let _ = write!(css, " box-shadow: {};", shadow);
        }
        css
    }
}
