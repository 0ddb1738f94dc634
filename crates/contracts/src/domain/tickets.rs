use serde::{Deserialize, Serialize};

/// One ticket card of the event landing page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TicketCard {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub price: String,
    pub src: String,
}

/// The full ticket catalog. Static data: the landing page has a fixed
/// line-up, and the dialog's ticket options come from these titles.
pub fn catalog() -> Vec<TicketCard> {
    let cards = [
        (
            1,
            "8km Power Run",
            "T-shirt, backpack & race number",
            "R180.00",
            "https://www.nativechild.co/wp-content/uploads/2025/09/Group-10369.png",
        ),
        (
            2,
            "5km Fun Run",
            "T-shirt, backpack & race number",
            "R120.00",
            "https://www.nativechild.co/wp-content/uploads/2025/09/Group-10370.png",
        ),
        (
            3,
            "Track Runs",
            "Included in activity passes (100m, 200m, 400m sprints, relays & kids races)",
            "R180.00",
            "https://www.nativechild.co/wp-content/uploads/2025/09/Group-10371.png",
        ),
        (
            4,
            "Activities Only Pass",
            "Obstacle courses, bubble soccer, backyard legends, stage events & more) Does not include runs",
            "R180.00",
            "https://www.nativechild.co/wp-content/uploads/2025/09/Group-10372.png",
        ),
        (
            5,
            "All-Inclusive Pass",
            "Everything included",
            "R249.00",
            "https://www.nativechild.co/wp-content/uploads/2025/09/Group-10373.png",
        ),
        (
            6,
            "Spectator",
            "Entry only",
            "R80.00",
            "https://www.nativechild.co/wp-content/uploads/2025/09/Group-10374.png",
        ),
    ];

    cards
        .into_iter()
        .map(|(id, title, description, price, src)| TicketCard {
            id,
            title: title.to_string(),
            description: description.to_string(),
            price: price.to_string(),
            src: src.to_string(),
        })
        .collect()
}
