use crate::config::Texts;

/// Show/hide state of the price table on the landing page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PricingToggle {
    expanded: bool,
}

impl PricingToggle {
    pub fn is_hidden(&self) -> bool {
        !self.expanded
    }

    pub fn toggled(self) -> Self {
        Self {
            expanded: !self.expanded,
        }
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.expanded {
            "true"
        } else {
            "false"
        }
    }

    pub fn label<'a>(&self, texts: &'a Texts) -> &'a str {
        if self.expanded {
            &texts.hide_prices
        } else {
            &texts.show_prices
        }
    }
}
