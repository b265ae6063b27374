//! A citation type that implements both hierarchies natively.

use std::any::TypeId;
use std::fmt;
use std::sync::Arc;

use geoapi_bridge::{Object, View, geoapi, opengis};
use indexmap::IndexSet;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DualCitation {
    pub title: String,
}

impl DualCitation {
    pub fn new(title: &str) -> Arc<Self> {
        Arc::new(Self {
            title: title.to_string(),
        })
    }
}

impl fmt::Display for DualCitation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

impl Object for DualCitation {
    fn native_view(self: Arc<Self>, target: TypeId) -> Option<View> {
        let this = Arc::clone(&self);
        View::offer::<dyn geoapi::Citation>(target, move || this as Arc<dyn geoapi::Citation>)
            .or_else(|| {
                View::offer::<dyn opengis::Citation>(target, move || {
                    self as Arc<dyn opengis::Citation>
                })
            })
    }
}

impl opengis::Citation for DualCitation {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn alternate_titles(&self) -> Vec<String> {
        Vec::new()
    }

    fn dates(&self) -> Vec<opengis::CitationDate> {
        Vec::new()
    }

    fn edition(&self) -> Option<String> {
        None
    }

    fn identifiers(&self) -> Vec<Arc<dyn opengis::Identifier>> {
        Vec::new()
    }

    fn cited_responsible_parties(&self) -> Vec<Arc<dyn opengis::ResponsibleParty>> {
        Vec::new()
    }

    fn presentation_forms(&self) -> IndexSet<opengis::PresentationForm> {
        IndexSet::new()
    }

    fn other_citation_details(&self) -> Option<String> {
        None
    }
}

impl geoapi::Citation for DualCitation {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn alternate_titles(&self) -> Vec<String> {
        Vec::new()
    }

    fn dates(&self) -> Vec<geoapi::CitationDate> {
        Vec::new()
    }

    fn edition(&self) -> Option<String> {
        None
    }

    fn identifiers(&self) -> Vec<Arc<dyn geoapi::Identifier>> {
        Vec::new()
    }

    fn cited_responsible_parties(&self) -> Vec<Arc<dyn geoapi::ResponsibleParty>> {
        Vec::new()
    }

    fn presentation_forms(&self) -> IndexSet<geoapi::PresentationForm> {
        IndexSet::new()
    }

    fn other_citation_details(&self) -> Option<String> {
        None
    }
}
