use yew::prelude::*;
use yew_hooks::use_window_size;

use crate::carousel::{
    Autoplay, BrowserScheduler, CarouselAction, CarouselState, SlideLayout, AUTOPLAY_INTERVAL_MS, LOGOS,
};

#[function_component(IntegrationCarousel)]
pub fn integration_carousel() -> Html {
    let carousel = use_reducer(|| CarouselState::new(LOGOS.len()));
    let (width, _) = use_window_size();
    let layout = SlideLayout::for_width(width);

    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |_| {
                let autoplay = Autoplay::start(&BrowserScheduler, AUTOPLAY_INTERVAL_MS, move || {
                    dispatcher.dispatch(CarouselAction::Next)
                });
                // Interval is cleared when the component unmounts
                move || drop(autoplay)
            },
            (),
        );
    }

    let slide_style = format!(
        "flex: 0 0 calc({:.4}% - {}px); margin-right: {}px;",
        layout.slide_width_percent(),
        layout.spacing_px,
        layout.spacing_px
    );

    html! {
        <section class="integrations">
            <style>
                {r#"
                    .integrations {
                        padding: 4rem 0;
                        background: #fff;
                    }
                    .integrations h2 {
                        font-size: 2.25rem;
                        font-weight: 700;
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .logo-track {
                        display: flex;
                        overflow: hidden;
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 1.5rem;
                    }
                    .logo-slide {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 12px;
                        padding: 1.5rem;
                        background: #f9fafb;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                        animation: slideFade 0.5s ease-out;
                    }
                    .logo-slide img {
                        height: 8rem;
                        max-width: 180px;
                        object-fit: contain;
                    }
                    @keyframes slideFade {
                        from { opacity: 0.4; }
                        to { opacity: 1; }
                    }
                    @media (max-width: 768px) {
                        .integrations h2 { font-size: 1.875rem; }
                        .logo-slide img { height: 7rem; }
                    }
                "#}
            </style>
            <h2>{"Integração com os principais sistemas do mercado"}</h2>
            <div class="logo-track">
                { for carousel.visible(layout.rendered_slides()).into_iter().map(|idx| {
                    let logo = LOGOS[idx];
                    html! {
                        <div key={logo.name} class="logo-slide" style={slide_style.clone()}>
                            <img src={logo.url} alt={logo.name} />
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}
