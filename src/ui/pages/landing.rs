//! Landing page component
//!
//! Static, server-rendered markup for the UpFinances landing page:
//! - SEO meta tags
//! - Header with theme toggle, mobile menu and section navigation
//! - Hero section with animated counters
//! - Features section
//! - Plans section with the plan switcher and monthly/yearly pricing cards
//! - FAQ accordion
//! - Footer with the current year
//!
//! Nothing here is reactive. Once hydrated, the controllers in
//! [`crate::core`] bind to the ids and data attributes rendered below.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::config::{SETTINGS_ELEMENT_ID, Settings};
use crate::core::format::NumberFormat;
use crate::core::plans::{FALLBACK_PLAN_ID, Plan, PlanCatalog};
use crate::core::theme::Theme;
use crate::ui::icon::{Icon, icons};

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    let settings = use_context::<Settings>().unwrap_or_default();
    let embedded = settings.to_embedded_json();

    view! {
        <SeoMeta />

        <Header />

        <main>
            <HeroSection />
            <FeaturesSection />
            <PlansSection default_plan=settings.default_plan.clone() />
            <FaqSection />
        </main>

        <Footer />

        // Read by the browser controllers at mount
        <script type="application/json" id=SETTINGS_ELEMENT_ID inner_html=embedded></script>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="UpFinances - Controle financeiro simples" />

        <Meta name="description" content="Organize receitas, despesas e metas em um só lugar. Comece grátis com o UpFinances." />
        <Meta name="keywords" content="finanças pessoais, controle financeiro, orçamento, transações, relatórios" />

        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="UpFinances - Controle financeiro simples" />
        <Meta property="og:description" content="Organize receitas, despesas e metas em um só lugar." />

        <Link rel="canonical" href="/" />
    }
}

/// Header component with mobile menu support
#[component]
fn Header() -> impl IntoView {
    let theme = Theme::default();

    view! {
        <header class="site-header">
            <div class="container header-inner">
                <a href="#inicio" class="brand">
                    <Logo />
                    <span>"UpFinances"</span>
                </a>

                <nav id="siteNav" class="site-nav" aria-label="Navegação principal">
                    <a href="#inicio">"Início"</a>
                    <a href="#recursos">"Recursos"</a>
                    <a href="#planos">"Planos"</a>
                    <a href="#faq">"FAQ"</a>
                </nav>

                <div class="header-actions">
                    <button
                        id="themeToggle"
                        type="button"
                        class="theme-toggle"
                        aria-pressed="false"
                        aria-label=theme.toggle_aria_label()
                    >
                        <Icon name=icons::MOON class="icon" />
                        <span id="themeToggleText">{theme.label()}</span>
                    </button>

                    <button
                        id="menuToggle"
                        type="button"
                        class="menu-toggle"
                        aria-controls="siteNav"
                        aria-expanded="false"
                        aria-label="Abrir menu"
                    >
                        <Icon name=icons::MENU class="icon" />
                    </button>
                </div>
            </div>
        </header>
    }
}

#[component]
fn HeroSection() -> impl IntoView {
    view! {
        <section id="inicio" class="hero">
            <div class="container hero-inner">
                <div class="hero-copy" data-reveal="">
                    <h1>"Suas finanças no controle, sem planilhas."</h1>
                    <p>
                        "Registre entradas e saídas, acompanhe o saldo em tempo real e descubra para onde vai o seu dinheiro."
                    </p>
                    <div class="hero-actions">
                        <a href="#planos" class="btn btn-primary">"Ver planos"</a>
                        <a href="#recursos" class="btn btn-secondary">"Conhecer recursos"</a>
                    </div>
                </div>

                <div class="stats">
                    <StatCard count=12000 prefix="+" suffix="" label="usuários organizando as contas" />
                    <StatCard count=850000 prefix="" suffix="" label="transações registradas" />
                    <StatCard count=98 prefix="" suffix="%" label="de satisfação" />
                </div>
            </div>
        </section>
    }
}

/// Animated statistic. Renders zero until the counter controller runs.
#[component]
fn StatCard(
    count: i64,
    prefix: &'static str,
    suffix: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <div class="stat" data-reveal="">
            <strong
                class="stat-value"
                data-count=count.to_string()
                data-prefix=prefix
                data-suffix=suffix
            >
                {format!("{}0{}", prefix, suffix)}
            </strong>
            <span class="stat-label">{label}</span>
        </div>
    }
}

#[component]
fn FeaturesSection() -> impl IntoView {
    view! {
        <section id="recursos" class="section">
            <div class="container">
                <div class="section-heading" data-reveal="">
                    <h2>"Tudo o que você precisa para organizar o mês"</h2>
                    <p>"Ferramentas simples para quem quer clareza sem complicação."</p>
                </div>

                <div class="feature-grid">
                    <FeatureCard
                        title="Dashboard completo"
                        description="Saldo, entradas e saídas lado a lado, atualizados a cada lançamento."
                    />
                    <FeatureCard
                        title="Transações com filtros"
                        description="Encontre qualquer gasto por período, categoria ou valor."
                    />
                    <FeatureCard
                        title="Relatórios em PDF"
                        description="Exporte relatórios mensais prontos para compartilhar."
                    />
                    <FeatureCard
                        title="Acesso seguro"
                        description="Autenticação completa e dados protegidos em todas as etapas."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <article class="feature-card" data-reveal="">
            <h3>{title}</h3>
            <p>{description}</p>
        </article>
    }
}

/// Plan shown before the switcher mounts, falling back to the free plan
fn initial_plan(catalog: &PlanCatalog, requested: &str) -> (&'static str, &'static Plan) {
    catalog
        .ids()
        .find(|id| *id == requested)
        .or_else(|| catalog.ids().find(|id| *id == FALLBACK_PLAN_ID))
        .and_then(|id| catalog.get(id).map(|plan| (id, plan)))
        .unwrap_or(("free", &EMPTY_PLAN))
}

const EMPTY_PLAN: Plan = Plan {
    subtitle: "",
    cta: "",
    features: &[],
};

/// Plans section: plan switcher followed by the pricing cards
#[component]
fn PlansSection(default_plan: String) -> impl IntoView {
    let catalog = PlanCatalog::builtin();
    let (selected, plan) = initial_plan(&catalog, &default_plan);

    view! {
        <section id="planos" class="section section-alt">
            <div class="container">
                <div class="section-heading" data-reveal="">
                    <h2>"Escolha o plano ideal"</h2>
                    <p>"Comece grátis e evolua quando precisar de mais."</p>
                </div>

                <div class="plan-switcher" data-reveal="">
                    <div class="switch" role="tablist">
                        {catalog.ids().map(|id| {
                            let active = id == selected;
                            view! {
                                <button
                                    type="button"
                                    class="switch-btn"
                                    class:active=active
                                    role="tab"
                                    data-plan=id
                                    aria-selected=if active { "true" } else { "false" }
                                >
                                    {plan_name(id)}
                                </button>
                            }
                        }).collect_view()}
                    </div>

                    <p id="planSubtitle" class="plan-subtitle">{plan.subtitle}</p>
                    <ul id="planFeatures" class="plan-features">
                        {plan.features.iter().map(|feature| view! { <li>{*feature}</li> }).collect_view()}
                    </ul>
                    <button id="planCta" type="button" class="btn btn-primary">{plan.cta}</button>
                </div>

                <div class="billing" data-reveal="">
                    <span>"Mensal"</span>
                    <label class="billing-switch">
                        <input id="billingToggle" type="checkbox" aria-label="Cobrança anual" />
                        <span class="slider"></span>
                    </label>
                    <span>"Anual"</span>
                </div>

                <div class="pricing-grid">
                    <PricingCard
                        name="Free"
                        monthly=0.0
                        yearly=0.0
                        description="Para começar a organizar suas finanças"
                        highlighted=false
                    />
                    <PricingCard
                        name="Basic"
                        monthly=29.0
                        yearly=290.0
                        description="Para quem quer automação e relatórios"
                        highlighted=true
                    />
                </div>
            </div>
        </section>
    }
}

fn plan_name(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Pricing card component. Amounts are rewritten by the billing toggle.
#[component]
fn PricingCard(
    name: &'static str,
    monthly: f64,
    yearly: f64,
    description: &'static str,
    highlighted: bool,
) -> impl IntoView {
    let format = NumberFormat::pt_br();
    let card_class = if highlighted {
        "pricing-card highlighted"
    } else {
        "pricing-card"
    };

    view! {
        <article class=card_class data-reveal="">
            {highlighted.then(|| view! { <span class="badge">"Mais popular"</span> })}
            <h3>{name}</h3>
            <div class="amount">
                <span class="currency">"R$"</span>
                <span
                    class="price"
                    data-monthly=monthly.to_string()
                    data-yearly=yearly.to_string()
                >
                    {format.format_decimal(monthly)}
                </span>
                <span class="period" data-monthly="/mês" data-yearly="/ano">"/mês"</span>
            </div>
            <p>{description}</p>
        </article>
    }
}

/// FAQ section component
#[component]
fn FaqSection() -> impl IntoView {
    view! {
        <section id="faq" class="section">
            <div class="container narrow">
                <div class="section-heading" data-reveal="">
                    <h2>"Perguntas frequentes"</h2>
                </div>

                <div class="faq-list">
                    <FaqItem
                        question="O plano Free é gratuito para sempre?"
                        answer="Sim. O Free não tem prazo de validade e inclui os recursos essenciais, com um limite mensal de transações."
                    />
                    <FaqItem
                        question="Posso trocar de plano depois?"
                        answer="Pode. A mudança entre Free e Basic vale imediatamente e seus dados continuam onde estão."
                    />
                    <FaqItem
                        question="Como funciona a cobrança anual?"
                        answer="Você paga uma vez por ano e economiza em relação ao valor mensal."
                    />
                    <FaqItem
                        question="Meus dados estão seguros?"
                        answer="Todo acesso exige autenticação e as informações trafegam sempre criptografadas."
                    />
                </div>
            </div>
        </section>
    }
}

/// FAQ accordion item component
#[component]
fn FaqItem(question: &'static str, answer: &'static str) -> impl IntoView {
    view! {
        <div class="faq-item" data-reveal="">
            <button type="button" class="faq-question" aria-expanded="false">
                <span>{question}</span>
                <Icon name=icons::CHEVRON_DOWN class="icon chevron" />
            </button>
            <div class="faq-answer">
                <p>{answer}</p>
            </div>
        </div>
    }
}

#[component]
fn Logo() -> impl IntoView {
    view! {
        <svg class="logo" viewBox="0 0 32 32" aria-hidden="true">
            <rect width="32" height="32" rx="8" fill="currentColor" />
            <path d="M9 20l5-5 4 4 6-8" stroke="#fff" stroke-width="2.5" fill="none" stroke-linecap="round" stroke-linejoin="round" />
        </svg>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container">
                <p>
                    "© " <span id="year">{current_year().to_string()}</span> " UpFinances. Todos os direitos reservados."
                </p>
            </div>
        </footer>
    }
}

#[cfg(feature = "ssr")]
fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Local::now().year()
}

#[cfg(all(feature = "hydrate", not(feature = "ssr")))]
fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}

#[cfg(not(any(feature = "ssr", feature = "hydrate")))]
fn current_year() -> i32 {
    2026
}
