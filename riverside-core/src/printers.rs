//! 3D and document printer fleet.
use serde::{Deserialize, Serialize};
use smallvec::smallvec;

use crate::search::{SearchFields, Searchable, SearchQuery};

const DEFAULT_PRINTERS_DATA: &str =
    include_str!("../../riverside-web/static/assets/data/printers.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrinterKind {
    ThreeD,
    Document,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilamentStatus {
    #[default]
    Good,
    Low,
    Empty,
}

impl FilamentStatus {
    /// Low stock can still be booked; empty spools cannot.
    #[must_use]
    pub const fn is_bookable(self) -> bool {
        !matches!(self, Self::Empty)
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Low => "low",
            Self::Empty => "empty",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filament {
    pub name: String,
    /// CSS colour of the loaded spool.
    pub color: String,
    #[serde(default)]
    pub status: FilamentStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Printer {
    pub id: String,
    pub kind: PrinterKind,
    pub name: String,
    pub model: String,
    #[serde(default)]
    pub build_volume: Option<String>,
    #[serde(default)]
    pub resolution: Option<String>,
    #[serde(default)]
    pub materials: Vec<String>,
    pub available: bool,
    pub image_url: String,
    pub description: String,
    #[serde(default)]
    pub filaments: Vec<Filament>,
}

impl Printer {
    /// Materials a booking may choose: in-stock filaments for 3D printers,
    /// supported media for document printers.
    #[must_use]
    pub fn bookable_materials(&self) -> Vec<&str> {
        match self.kind {
            PrinterKind::ThreeD => self
                .filaments
                .iter()
                .filter(|filament| filament.status.is_bookable())
                .map(|filament| filament.name.as_str())
                .collect(),
            PrinterKind::Document => self.materials.iter().map(String::as_str).collect(),
        }
    }

    #[must_use]
    pub fn accepts_material(&self, material: &str) -> bool {
        self.bookable_materials().contains(&material)
    }
}

impl Searchable for Printer {
    fn search_fields(&self) -> SearchFields<'_> {
        let mut fields: SearchFields<'_> = smallvec![self.name.as_str(), self.model.as_str()];
        fields.extend(self.materials.iter().map(String::as_str));
        fields
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PrinterFleet {
    pub printers: Vec<Printer>,
}

impl PrinterFleet {
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe a printer fleet.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(DEFAULT_PRINTERS_DATA).unwrap_or_default()
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Printer> {
        self.printers.iter().find(|printer| printer.id == id)
    }

    #[must_use]
    pub fn of_kind(&self, kind: PrinterKind) -> Vec<&Printer> {
        self.printers.iter().filter(|p| p.kind == kind).collect()
    }

    /// Printers of `kind` matching `query` on name, model or materials.
    #[must_use]
    pub fn search(&self, kind: PrinterKind, query: &str) -> Vec<&Printer> {
        let query = SearchQuery::new(query);
        self.printers
            .iter()
            .filter(|p| p.kind == kind && query.matches(*p))
            .collect()
    }
}
