//! Page-level wiring of every landing page controller

use std::rc::Rc;

use leptos::logging::log;

use super::billing::BillingToggle;
use super::config::Settings;
use super::counter::CounterController;
use super::dom::Dom;
use super::faq::FaqAccordion;
use super::footer::set_footer_year;
use super::navigation::NavigationController;
use super::plans::{PlanCatalog, PlanSwitcher};
use super::reveal::RevealController;
use super::scheduler::Scheduler;
use super::store::{KeyValueStore, PreferenceStore};
use super::theme::ThemeController;

/// Every controller mounted on the page.
///
/// Event handlers keep their own references, so dropping this value does
/// not unbind anything; it is returned for inspection.
pub struct Landing<D: Dom, K> {
    pub theme: Rc<ThemeController<D, K>>,
    pub navigation: Rc<NavigationController<D>>,
    pub reveal: RevealController<D>,
    pub counters: CounterController<D>,
    pub plans: Rc<PlanSwitcher<D>>,
    pub billing: Rc<BillingToggle<D>>,
    pub faq: Rc<FaqAccordion<D>>,
}

impl<D, K> Landing<D, K>
where
    D: Dom + 'static,
    K: KeyValueStore + 'static,
{
    /// Bind every controller to the rendered page and apply initial state
    pub fn mount<S>(
        dom: Rc<D>,
        store: PreferenceStore<K>,
        scheduler: Rc<S>,
        settings: &Settings,
        year: i32,
    ) -> Self
    where
        S: Scheduler<D::Element> + 'static,
    {
        let theme = Rc::new(ThemeController::new(
            Rc::clone(&dom),
            store,
            settings.theme_storage_key.clone(),
        ));
        theme.mount();

        let navigation = Rc::new(NavigationController::new(
            Rc::clone(&dom),
            settings.nav_scroll_offset,
        ));
        navigation.mount(&*scheduler);

        let reveal = RevealController::new(
            Rc::clone(&dom),
            settings.reveal_step_ms,
            settings.reveal_max_delay_ms,
            settings.reveal_threshold,
        );
        reveal.mount(&*scheduler);

        let counters = CounterController::new(
            Rc::clone(&dom),
            settings.counter_duration_ms,
            settings.counter_threshold,
        );
        counters.mount(&scheduler);

        let plans = Rc::new(PlanSwitcher::new(Rc::clone(&dom), PlanCatalog::builtin()));
        plans.mount(&settings.default_plan);

        let billing = Rc::new(BillingToggle::new(Rc::clone(&dom)));
        billing.mount();

        let faq = Rc::new(FaqAccordion::new(Rc::clone(&dom)));
        faq.mount();

        set_footer_year(&*dom, year);

        log!(
            "Landing mounted: {} reveal, {} counters, {} faq items",
            reveal.len(),
            counters.len(),
            faq.len()
        );

        Self {
            theme,
            navigation,
            reveal,
            counters,
            plans,
            billing,
            faq,
        }
    }
}
