//! Static event content.
//!
//! Everything the site announces is compiled in: the couple, the target
//! instant, the gallery, the menus, and the itinerary. No persistence,
//! no network - this module is the whole data layer.

pub const COUPLE: &str = "Piyush ♥ Dhawal";
pub const DATES: &str = "February 9–10, 2026 · Pushkar";
pub const TAGLINE: &str = "Join us for intimate ceremonies, joyful music and warm celebrations.";

/// The instant the countdown counts down to: Feb 10, 2026 11:00 PM IST.
/// The explicit offset keeps the countdown identical for every viewer
/// regardless of their local time zone.
pub const WEDDING_TARGET: &str = "2026-02-10T23:00:00+05:30";

pub const VENUE: &str = "Pushkar, Rajasthan, India";
pub const VENUE_NOTE: &str = "All functions take place on the resort grounds by the ghats.";
pub const MAPS_LINK: &str = "https://www.google.com/maps/place/Pushkar,+Rajasthan";

/// A gallery photo. Terminals render no pixels, so each photo carries a
/// caption and a blurb shown in the lightbox.
pub struct Photo {
    pub caption: &'static str,
    pub credit: &'static str,
    pub blurb: &'static str,
}

pub const PHOTOS: &[Photo] = &[
    Photo {
        caption: "Golden hour at the dunes",
        credit: "Christ Anna Photography",
        blurb: "The first frame of the pre-wedding shoot, sand still warm from the afternoon.",
    },
    Photo {
        caption: "Mehndi afternoon",
        credit: "Christ Anna Photography",
        blurb: "Henna drying on the terrace while the playlist argument went unresolved.",
    },
    Photo {
        caption: "The proposal",
        credit: "Christ Anna Photography",
        blurb: "One knee, one ring, and a waiter who nearly dropped the dessert tray.",
    },
    Photo {
        caption: "Monsoon walk",
        credit: "Christ Anna Photography",
        blurb: "One umbrella between two people, by choice.",
    },
    Photo {
        caption: "Chai break",
        credit: "Christ Anna Photography",
        blurb: "Roadside kulhads outside Ajmer, halfway through the venue hunt.",
    },
    Photo {
        caption: "City lights",
        credit: "Christ Anna Photography",
        blurb: "The rooftop where the date was finally fixed.",
    },
    Photo {
        caption: "Engagement day",
        credit: "Christ Anna Photography",
        blurb: "Both families, one very long lunch.",
    },
    Photo {
        caption: "Pushkar ghats",
        credit: "Christ Anna Photography",
        blurb: "Where it all happens this February.",
    },
];

/// The wedding functions, in schedule order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Carnival,
    Sangeet,
    Mayra,
    Reception,
}

impl Function {
    pub const ALL: [Function; 4] = [
        Function::Carnival,
        Function::Sangeet,
        Function::Mayra,
        Function::Reception,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Function::Carnival => "Carnival",
            Function::Sangeet => "Sangeet",
            Function::Mayra => "Mayra",
            Function::Reception => "Reception",
        }
    }
}

/// Menu course categories, used for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Course {
    Cuisine,
    FastFood,
    Dessert,
}

impl Course {
    pub const ALL: [Course; 3] = [Course::Cuisine, Course::FastFood, Course::Dessert];

    pub fn label(self) -> &'static str {
        match self {
            Course::Cuisine => "cuisine",
            Course::FastFood => "fastfood",
            Course::Dessert => "dessert",
        }
    }
}

pub struct MenuItem {
    pub name: &'static str,
    pub function: Function,
    pub course: Course,
}

pub const MENU: &[MenuItem] = &[
    // Carnival
    MenuItem {
        name: "Boho Salad with Toasted Seeds",
        function: Function::Carnival,
        course: Course::Cuisine,
    },
    MenuItem {
        name: "Street Pani Puri",
        function: Function::Carnival,
        course: Course::FastFood,
    },
    MenuItem {
        name: "Mini Tacos",
        function: Function::Carnival,
        course: Course::FastFood,
    },
    MenuItem {
        name: "Coconut Kulfi",
        function: Function::Carnival,
        course: Course::Dessert,
    },
    // Sangeet
    MenuItem {
        name: "Charcoal Grilled Paneer",
        function: Function::Sangeet,
        course: Course::Cuisine,
    },
    MenuItem {
        name: "Smoked Salmon Canapés",
        function: Function::Sangeet,
        course: Course::Cuisine,
    },
    MenuItem {
        name: "Chocolate Cascade",
        function: Function::Sangeet,
        course: Course::Dessert,
    },
    MenuItem {
        name: "Cocktail Mocktail Bar",
        function: Function::Sangeet,
        course: Course::FastFood,
    },
    // Mayra
    MenuItem {
        name: "Traditional Mithai Platter",
        function: Function::Mayra,
        course: Course::Dessert,
    },
    MenuItem {
        name: "Samosa Chaat",
        function: Function::Mayra,
        course: Course::FastFood,
    },
    MenuItem {
        name: "Tamarind Rice",
        function: Function::Mayra,
        course: Course::Cuisine,
    },
    // Reception
    MenuItem {
        name: "Heritage Dal Makhani",
        function: Function::Reception,
        course: Course::Cuisine,
    },
    MenuItem {
        name: "Slow-Cooked Rogan Josh",
        function: Function::Reception,
        course: Course::Cuisine,
    },
    MenuItem {
        name: "Gulab Jamun Duo",
        function: Function::Reception,
        course: Course::Dessert,
    },
    MenuItem {
        name: "Warm Bread Basket",
        function: Function::Reception,
        course: Course::FastFood,
    },
];

pub struct ItineraryEntry {
    pub day: &'static str,
    pub time: &'static str,
    pub title: &'static str,
}

pub const ITINERARY: &[ItineraryEntry] = &[
    ItineraryEntry {
        day: "Feb 9",
        time: "8:00 AM",
        title: "Welcome",
    },
    ItineraryEntry {
        day: "Feb 9",
        time: "9:00 AM",
        title: "Breakfast",
    },
    ItineraryEntry {
        day: "Feb 9",
        time: "11:00 AM",
        title: "Carnival",
    },
    ItineraryEntry {
        day: "Feb 9",
        time: "4:00 PM",
        title: "High Tea",
    },
    ItineraryEntry {
        day: "Feb 9",
        time: "7:00 PM",
        title: "Sangeet",
    },
    ItineraryEntry {
        day: "Feb 10",
        time: "8:00 AM",
        title: "Breakfast",
    },
    ItineraryEntry {
        day: "Feb 10",
        time: "10:00 AM",
        title: "Mayra",
    },
    ItineraryEntry {
        day: "Feb 10",
        time: "4:00 PM",
        title: "High Tea",
    },
    ItineraryEntry {
        day: "Feb 10",
        time: "5:30 PM",
        title: "Baarat",
    },
    ItineraryEntry {
        day: "Feb 10",
        time: "7:00 PM",
        title: "Reception",
    },
    ItineraryEntry {
        day: "Feb 10",
        time: "11:00 PM",
        title: "Phere",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countdown::CountdownEngine;

    #[test]
    fn wedding_target_parses() {
        assert!(CountdownEngine::new(WEDDING_TARGET).is_ok());
    }

    #[test]
    fn every_function_has_menu_items() {
        for function in Function::ALL {
            assert!(
                MENU.iter().any(|item| item.function == function),
                "{} has no menu items",
                function.label()
            );
        }
    }

    #[test]
    fn itinerary_covers_both_days() {
        assert!(ITINERARY.iter().any(|e| e.day == "Feb 9"));
        assert!(ITINERARY.iter().any(|e| e.day == "Feb 10"));
    }
}
