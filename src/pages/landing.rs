use chrono::Datelike;
use yew::prelude::*;

use crate::components::contact::Contact;
use crate::components::integration_carousel::IntegrationCarousel;
use crate::config::SubmissionConfig;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub submission: SubmissionConfig,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let year = chrono::Local::now().year();

    html! {
        <div class="landing-page">
            <style>
                {r#"
                    .hero {
                        padding: 8rem 1rem 5rem;
                        text-align: center;
                        background: linear-gradient(180deg, #e3f2fd 0%, #fff 100%);
                    }
                    .hero h1 {
                        font-size: 3rem;
                        font-weight: 800;
                        max-width: 48rem;
                        margin: 0 auto 1.5rem;
                    }
                    .hero-subtitle {
                        font-size: 1.25rem;
                        color: #4b5563;
                        max-width: 40rem;
                        margin: 0 auto 2rem;
                    }
                    .hero-cta {
                        display: inline-block;
                        padding: 1rem 2rem;
                        background: #1e88e5;
                        color: #fff;
                        border-radius: 6px;
                        text-decoration: none;
                        font-weight: 600;
                    }
                    .section-title {
                        font-size: 2.25rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }
                    .landing-footer {
                        padding: 2rem 1rem;
                        text-align: center;
                        color: #9ca3af;
                        font-size: 0.875rem;
                        border-top: 1px solid #f3f4f6;
                    }
                    @media (max-width: 768px) {
                        .hero { padding: 6rem 1rem 3rem; }
                        .hero h1 { font-size: 2rem; }
                        .section-title { font-size: 1.75rem; }
                    }
                "#}
            </style>

            // Hero Section
            <section class="hero">
                <h1>{"Menos ligações, mais pacientes na cadeira"}</h1>
                <p class="hero-subtitle">
                    {"Atendimento automatizado no WhatsApp para clínicas odontológicas: agendamentos, confirmações e dúvidas resolvidos sem ocupar a sua recepção."}
                </p>
                <a class="hero-cta" href="#contact">{"Quero conhecer"}</a>
            </section>

            <IntegrationCarousel />

            <Contact config={props.submission.clone()} />

            <footer class="landing-footer">
                {format!("© {} Talkaio. Todos os direitos reservados.", year)}
            </footer>
        </div>
    }
}
