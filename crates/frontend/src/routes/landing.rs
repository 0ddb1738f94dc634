use crate::domain::tickets::ui::TicketCarousel;
use leptos::prelude::*;

/// The single page of the app: hero block plus the ticket carousel.
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <main class="landing">
            <section class="hero">
                <h1 class="hero-title">"Family Fun Run & Field Day"</h1>
                <p class="hero-subtitle">
                    "Runs, obstacle courses, bubble soccer and stage events. Grab a ticket or join the waiting list."
                </p>
            </section>

            <section class="tickets-section">
                <h2 class="tickets-heading">"Tickets"</h2>
                <TicketCarousel />
            </section>
        </main>
    }
}
