//! Citation, responsible party, address and identifier families.

/// Instantiates the metadata families for one direction.
///
/// `role` is the target type of `ResponsibleParty::role`, which is optional
/// in OpenGIS and mandatory in GeoAPI.
macro_rules! metadata_family {
    ($src:ident => $dst:ident, $facade:ident, role: $role:ty) => {
        use std::sync::Arc;

        use indexmap::IndexSet;

        use $crate::bridge::{
            $facade, Dispatch, SubtypeTable, Wrapper, lift_set_opt, lift_vec, translate_codes,
        };
        use $crate::{$dst, $src};

        // ====================================================================
        // Citation
        // ====================================================================

        impl<S: ?Sized + $src::Citation> $dst::Citation for Wrapper<S> {
            fn title(&self) -> String {
                self.backing().title()
            }

            fn alternate_titles(&self) -> Vec<String> {
                self.backing().alternate_titles()
            }

            fn dates(&self) -> Vec<$dst::CitationDate> {
                // The hierarchies record dates differently (ISO text against
                // epoch milliseconds). Left empty until a calendar mapping exists.
                Vec::new()
            }

            fn edition(&self) -> Option<String> {
                self.backing().edition()
            }

            fn identifiers(&self) -> Vec<Arc<dyn $dst::Identifier>> {
                lift_vec(&self.backing().identifiers(), $dst)
            }

            fn cited_responsible_parties(&self) -> Vec<Arc<dyn $dst::ResponsibleParty>> {
                lift_vec(&self.backing().cited_responsible_parties(), $dst)
            }

            fn presentation_forms(&self) -> IndexSet<$dst::PresentationForm> {
                translate_codes(&self.backing().presentation_forms())
            }

            fn other_citation_details(&self) -> Option<String> {
                self.backing().other_citation_details()
            }
        }

        pub static CITATION: Dispatch<dyn $src::Citation, dyn $dst::Citation> = Dispatch {
            family: "citation",
            unwrap: unwrap_wrappers!(dyn $dst::Citation: Wrapper<dyn $dst::Citation>),
            table: SubtypeTable {
                subtypes: &[],
                generic: plain_wrapper!(dyn $src::Citation => dyn $dst::Citation),
            },
        };

        facade!($facade: dyn $src::Citation => dyn $dst::Citation, CITATION);

        // ====================================================================
        // Responsible party
        // ====================================================================

        impl<S: ?Sized + $src::ResponsibleParty> $dst::ResponsibleParty for Wrapper<S> {
            fn individual_name(&self) -> Option<String> {
                self.backing().individual_name()
            }

            fn organisation_name(&self) -> Option<String> {
                self.backing().organisation_name()
            }

            fn position_name(&self) -> Option<String> {
                self.backing().position_name()
            }

            fn address(&self) -> Option<Arc<dyn $dst::Address>> {
                self.backing().address().map(|address| $dst(&address))
            }

            fn role(&self) -> $role {
                $crate::bridge::convert::$dst::role(self.backing().role())
            }
        }

        pub static RESPONSIBLE_PARTY: Dispatch<dyn $src::ResponsibleParty, dyn $dst::ResponsibleParty> =
            Dispatch {
                family: "responsible party",
                unwrap: unwrap_wrappers!(
                    dyn $dst::ResponsibleParty: Wrapper<dyn $dst::ResponsibleParty>
                ),
                table: SubtypeTable {
                    subtypes: &[],
                    generic: plain_wrapper!(dyn $src::ResponsibleParty => dyn $dst::ResponsibleParty),
                },
            };

        facade!($facade: dyn $src::ResponsibleParty => dyn $dst::ResponsibleParty, RESPONSIBLE_PARTY);

        // ====================================================================
        // Address
        // ====================================================================

        impl<S: ?Sized + $src::Address> $dst::Address for Wrapper<S> {
            fn delivery_points(&self) -> Vec<String> {
                self.backing().delivery_points()
            }

            fn city(&self) -> Option<String> {
                self.backing().city()
            }

            fn administrative_area(&self) -> Option<String> {
                self.backing().administrative_area()
            }

            fn postal_code(&self) -> Option<String> {
                self.backing().postal_code()
            }

            fn country(&self) -> Option<String> {
                self.backing().country()
            }

            fn electronic_mail_addresses(&self) -> Option<IndexSet<String>> {
                lift_set_opt(self.backing().electronic_mail_addresses().as_ref(), String::clone)
            }
        }

        pub static ADDRESS: Dispatch<dyn $src::Address, dyn $dst::Address> = Dispatch {
            family: "address",
            unwrap: unwrap_wrappers!(dyn $dst::Address: Wrapper<dyn $dst::Address>),
            table: SubtypeTable {
                subtypes: &[],
                generic: plain_wrapper!(dyn $src::Address => dyn $dst::Address),
            },
        };

        facade!($facade: dyn $src::Address => dyn $dst::Address, ADDRESS);

        // ====================================================================
        // Identifier
        // ====================================================================

        impl<S: ?Sized + $src::Identifier> $dst::Identifier for Wrapper<S> {
            fn code(&self) -> String {
                self.backing().code()
            }

            fn authority(&self) -> Option<Arc<dyn $dst::Citation>> {
                self.backing().authority().map(|citation| $dst(&citation))
            }

            fn as_reference_identifier(self: Arc<Self>) -> Option<Arc<dyn $dst::ReferenceIdentifier>> {
                forward_facet!(self.as_reference_identifier)
            }
        }

        impl<S: ?Sized + $src::ReferenceIdentifier> $dst::ReferenceIdentifier for Wrapper<S> {
            fn code_space(&self) -> Option<String> {
                self.backing().code_space()
            }

            fn version(&self) -> Option<String> {
                self.backing().version()
            }
        }

        pub static IDENTIFIER: Dispatch<dyn $src::Identifier, dyn $dst::Identifier> = Dispatch {
            family: "identifier",
            unwrap: unwrap_wrappers!(
                dyn $dst::Identifier:
                Wrapper<dyn $dst::Identifier>,
                Wrapper<dyn $dst::ReferenceIdentifier>,
            ),
            table: SubtypeTable {
                subtypes: &[subtype!(
                    dyn $src::Identifier => dyn $dst::Identifier,
                    "reference identifier",
                    |identifier| Arc::clone(identifier).as_reference_identifier().map(Wrapper::wrap)
                )],
                generic: plain_wrapper!(dyn $src::Identifier => dyn $dst::Identifier),
            },
        };

        facade!($facade: dyn $src::Identifier => dyn $dst::Identifier, IDENTIFIER);
        facade!(
            $facade: dyn $src::ReferenceIdentifier => dyn $dst::ReferenceIdentifier,
            via dyn $src::Identifier, IDENTIFIER, as_reference_identifier
        );
    };
}
