//! Monthly/yearly billing toggle for the pricing cards

use std::rc::Rc;

use super::dom::Dom;
use super::format::{NumberFormat, parse_amount};

/// Period label used when a `.period` element has no yearly text
pub const DEFAULT_YEARLY_LABEL: &str = "/ano";

/// Period label used when a `.period` element has no monthly text
pub const DEFAULT_MONTHLY_LABEL: &str = "/mês";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BillingPeriod {
    #[default]
    Monthly,
    Yearly,
}

impl BillingPeriod {
    pub fn from_checked(checked: bool) -> Self {
        if checked {
            BillingPeriod::Yearly
        } else {
            BillingPeriod::Monthly
        }
    }

    /// Data attribute holding the amount or label for this period
    pub fn data_attribute(self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "data-monthly",
            BillingPeriod::Yearly => "data-yearly",
        }
    }

    pub fn default_label(self) -> &'static str {
        match self {
            BillingPeriod::Monthly => DEFAULT_MONTHLY_LABEL,
            BillingPeriod::Yearly => DEFAULT_YEARLY_LABEL,
        }
    }
}

/// Rewrites `.price` and `.period` elements from `#billingToggle`
pub struct BillingToggle<D: Dom> {
    dom: Rc<D>,
    toggle: Option<D::Element>,
    prices: Vec<D::Element>,
    periods: Vec<D::Element>,
    format: NumberFormat,
}

impl<D: Dom + 'static> BillingToggle<D> {
    pub fn new(dom: Rc<D>) -> Self {
        let toggle = dom.by_id("billingToggle");
        let prices = dom.query_all(".price");
        let periods = dom.query_all(".period");
        Self {
            dom,
            toggle,
            prices,
            periods,
            format: NumberFormat::pt_br(),
        }
    }

    /// Period selected by the toggle, `None` when the toggle is absent
    pub fn period(&self) -> Option<BillingPeriod> {
        let toggle = self.toggle.as_ref()?;
        Some(BillingPeriod::from_checked(self.dom.is_checked(toggle)))
    }

    /// Recompute every price and period label. No-op without the toggle.
    pub fn update_billing(&self) -> Option<BillingPeriod> {
        let period = self.period()?;
        let attribute = period.data_attribute();

        for price in &self.prices {
            let amount = parse_amount(self.dom.attribute(price, attribute).as_deref());
            self.dom.set_text(price, &self.format.format_decimal(amount));
        }

        for label in &self.periods {
            let text = self
                .dom
                .attribute(label, attribute)
                .filter(|text| !text.is_empty())
                .unwrap_or_else(|| period.default_label().to_string());
            self.dom.set_text(label, &text);
        }

        Some(period)
    }

    /// Listen for toggle changes and render the initial state
    pub fn mount(self: &Rc<Self>) {
        let Some(toggle) = &self.toggle else {
            return;
        };

        let billing = Rc::clone(self);
        self.dom.on_change(
            toggle,
            Rc::new(move || {
                billing.update_billing();
            }),
        );
        self.update_billing();
    }
}
