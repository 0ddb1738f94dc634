use contracts::domain::tickets::TicketCard;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use super::super::model;
use crate::domain::waiting_list::ui::WaitingListDialog;
use crate::shared::icons::icon;

const AUTOPLAY_DELAY_MS: u32 = 4000;

pub(crate) fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

pub(crate) fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + len - 1) % len
    }
}

/// Ticket card slider with prev/next controls and an autoplay tick.
#[component]
pub fn TicketCarousel() -> impl IntoView {
    let tickets = RwSignal::new(Vec::<TicketCard>::new());
    let index = RwSignal::new(0usize);

    wasm_bindgen_futures::spawn_local(async move {
        match model::fetch_tickets().await {
            Ok(cards) => tickets.set(cards),
            Err(e) => log::error!("Failed to load tickets: {}", e),
        }
    });

    // Autoplay: advance every few seconds until the signals are disposed.
    wasm_bindgen_futures::spawn_local(async move {
        loop {
            TimeoutFuture::new(AUTOPLAY_DELAY_MS).await;
            let len = match tickets.try_with(|t| t.len()) {
                Some(len) => len,
                None => break,
            };
            if len > 1 && index.try_update(|i| *i = next_index(*i, len)).is_none() {
                break;
            }
        }
    });

    view! {
        <div class="carousel">
            <div class="carousel-viewport">
                <div
                    class="carousel-track"
                    style=move || format!("transform: translateX(-{}%)", index.get() * 100)
                >
                    <For
                        each=move || tickets.get()
                        key=|card| card.id
                        children=move |card| {
                            view! {
                                <div class="carousel-slide ticket-card">
                                    <img class="ticket-image" src=card.src.clone() alt=card.title.clone() />
                                    <h3 class="ticket-title">{card.title.clone()}</h3>
                                    <p class="ticket-description">{card.description.clone()}</p>
                                    <div class="ticket-price">{card.price.clone()}</div>
                                    <WaitingListDialog ticket_title=card.title.clone() />
                                </div>
                            }
                        }
                    />
                </div>
            </div>

            <div class="carousel-controls">
                <button
                    class="carousel-button"
                    aria-label="Previous slide"
                    on:click=move |_| {
                        let len = tickets.with(|t| t.len());
                        index.update(|i| *i = prev_index(*i, len));
                    }
                >
                    {icon("chevron-left")}
                </button>
                <button
                    class="carousel-button"
                    aria-label="Next slide"
                    on:click=move |_| {
                        let len = tickets.with(|t| t.len());
                        index.update(|i| *i = next_index(*i, len));
                    }
                >
                    {icon("chevron-right")}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_around_the_catalog() {
        assert_eq!(next_index(0, 6), 1);
        assert_eq!(next_index(5, 6), 0);
    }

    #[test]
    fn prev_wraps_around_the_catalog() {
        assert_eq!(prev_index(0, 6), 5);
        assert_eq!(prev_index(3, 6), 2);
    }

    #[test]
    fn empty_catalog_stays_at_zero() {
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(prev_index(0, 0), 0);
    }
}
