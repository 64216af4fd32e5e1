use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    EscapeRooms,
    #[at("/printers")]
    Printers,
    #[at("/documents")]
    DocumentPrinters,
    #[at("/books")]
    Books,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// Entries shown in the main navigation, in order.
    pub const NAV: [Self; 4] = [
        Self::EscapeRooms,
        Self::Printers,
        Self::DocumentPrinters,
        Self::Books,
    ];

    /// Translation key for the navigation label.
    #[must_use]
    pub const fn label_key(&self) -> &'static str {
        match self {
            Self::EscapeRooms => "nav.escape_rooms",
            Self::Printers => "nav.printers",
            Self::DocumentPrinters => "nav.documents",
            Self::Books => "nav.books",
            Self::NotFound => "not_found.title",
        }
    }
}
