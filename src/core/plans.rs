//! Pricing plan catalog and the tab-like plan switcher

use std::rc::Rc;

use leptos::logging::warn;

use super::dom::{ClickAction, Dom};

/// Class marking the selected plan button
pub const SELECTED_CLASS: &str = "active";

/// Plan selected by a button that carries no `data-plan`
pub const FALLBACK_PLAN_ID: &str = "free";

/// Copy rendered for one plan
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plan {
    pub subtitle: &'static str,
    pub cta: &'static str,
    pub features: &'static [&'static str],
}

/// Ordered mapping from plan id to its copy
#[derive(Clone, Copy, Debug)]
pub struct PlanCatalog {
    entries: &'static [(&'static str, Plan)],
}

const PLANS: &[(&str, Plan)] = &[
    (
        "free",
        Plan {
            subtitle: "Plano para iniciar sua organização financeira com os recursos essenciais.",
            cta: "Começar no Free",
            features: &[
                "Cadastro e autenticação completa.",
                "Dashboard com saldo, entradas e saídas.",
                "Registro de transações com filtros.",
                "Limite mensal de transações para controle.",
            ],
        },
    ),
    (
        "basic",
        Plan {
            subtitle: "Plano para acelerar sua rotina com mais automação e profundidade de análise.",
            cta: "Assinatura Basic",
            features: &[
                "Tudo do Free, com maior capacidade operacional.",
                "Exclusão em lote e gestão avançada de transações.",
                "Relatórios financeiros exportáveis em PDF.",
                "Controle de regras de assinatura e acesso por plano.",
            ],
        },
    ),
];

impl PlanCatalog {
    pub const fn new(entries: &'static [(&'static str, Plan)]) -> Self {
        Self { entries }
    }

    /// The plans offered on the landing page
    pub const fn builtin() -> Self {
        Self::new(PLANS)
    }

    pub fn get(&self, id: &str) -> Option<&'static Plan> {
        self.entries
            .iter()
            .find(|(plan_id, _)| *plan_id == id)
            .map(|(_, plan)| plan)
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Plan ids in display order
    pub fn ids(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(id, _)| *id)
    }
}

impl Default for PlanCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Renders the selected plan into `#planSubtitle`, `#planFeatures` and `#planCta`
pub struct PlanSwitcher<D: Dom> {
    dom: Rc<D>,
    catalog: PlanCatalog,
    buttons: Vec<D::Element>,
    subtitle: Option<D::Element>,
    features: Option<D::Element>,
    cta: Option<D::Element>,
}

impl<D: Dom + 'static> PlanSwitcher<D> {
    pub fn new(dom: Rc<D>, catalog: PlanCatalog) -> Self {
        let buttons = dom.query_all(".switch-btn");
        let subtitle = dom.by_id("planSubtitle");
        let features = dom.by_id("planFeatures");
        let cta = dom.by_id("planCta");
        Self {
            dom,
            catalog,
            buttons,
            subtitle,
            features,
            cta,
        }
    }

    /// Render a plan and sync the buttons. Returns whether anything was rendered.
    pub fn render_plan(&self, id: &str) -> bool {
        let Some(plan) = self.catalog.get(id) else {
            warn!("Unknown plan requested: {}", id);
            return false;
        };
        let (Some(subtitle), Some(features), Some(cta)) = (&self.subtitle, &self.features, &self.cta)
        else {
            return false;
        };

        self.dom.set_text(subtitle, plan.subtitle);
        self.dom.set_list_items(features, plan.features);
        self.dom.set_text(cta, plan.cta);

        for button in &self.buttons {
            let selected = self.dom.attribute(button, "data-plan").as_deref() == Some(id);
            self.dom.set_class(button, SELECTED_CLASS, selected);
            self.dom
                .set_attribute(button, "aria-selected", if selected { "true" } else { "false" });
        }

        true
    }

    /// Wire the plan buttons and render the default plan
    pub fn mount(self: &Rc<Self>, default_plan: &str) {
        for button in &self.buttons {
            let switcher = Rc::clone(self);
            let element = button.clone();
            self.dom.on_click(
                button,
                Rc::new(move || {
                    let id = switcher
                        .dom
                        .attribute(&element, "data-plan")
                        .filter(|id| !id.is_empty())
                        .unwrap_or_else(|| FALLBACK_PLAN_ID.to_string());
                    switcher.render_plan(&id);
                    ClickAction::Continue
                }),
            );
        }

        self.render_plan(default_plan);
    }
}
