//! Field validation for bulk-replace input and seed data

use crate::contract::{CatalogError, PartnerDraft, ShopProductDraft};

/// Validate and normalize every partner, failing on the first bad one.
///
/// `name` is trimmed; every required field must contain a non-whitespace
/// character.
pub fn validate_partners(drafts: Vec<PartnerDraft>) -> Result<Vec<PartnerDraft>, CatalogError> {
    drafts
        .into_iter()
        .enumerate()
        .map(|(index, draft)| validate_partner(index, draft))
        .collect()
}

/// Validate and normalize every shop product, failing on the first bad one
pub fn validate_shop_products(
    drafts: Vec<ShopProductDraft>,
) -> Result<Vec<ShopProductDraft>, CatalogError> {
    drafts
        .into_iter()
        .enumerate()
        .map(|(index, draft)| validate_shop_product(index, draft))
        .collect()
}

fn validate_partner(index: usize, draft: PartnerDraft) -> Result<PartnerDraft, CatalogError> {
    let at = Location::new("partners", index);
    Ok(PartnerDraft {
        name: at.required("name", draft.name.trim().to_string())?,
        logo_src: at.required("logo_src", draft.logo_src)?,
        website_url: at.required("website_url", draft.website_url)?,
        alt_text: at.required("alt_text", draft.alt_text)?,
        order_index: draft.order_index,
    })
}

fn validate_shop_product(
    index: usize,
    draft: ShopProductDraft,
) -> Result<ShopProductDraft, CatalogError> {
    let at = Location::new("products", index);
    Ok(ShopProductDraft {
        title: at.required("title", draft.title.trim().to_string())?,
        description: at.required("description", draft.description)?,
        logo_src: at.required("logo_src", draft.logo_src)?,
        logo_alt: at.required("logo_alt", draft.logo_alt)?,
        order_index: draft.order_index,
    })
}

/// Position of a record inside the submitted array, used in messages
struct Location {
    collection: &'static str,
    index: usize,
}

impl Location {
    fn new(collection: &'static str, index: usize) -> Self {
        Self { collection, index }
    }

    fn required(&self, field: &str, value: String) -> Result<String, CatalogError> {
        if value.trim().is_empty() {
            return Err(CatalogError::validation(format!(
                "{}[{}].{} is required",
                self.collection, self.index, field
            )));
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partner(name: &str) -> PartnerDraft {
        PartnerDraft {
            name: name.to_string(),
            logo_src: "/imgs/logo-mf/acme.png".to_string(),
            website_url: "https://acme.example".to_string(),
            alt_text: "Acme Logo".to_string(),
            order_index: 1,
        }
    }

    #[test]
    fn trims_partner_name() {
        let validated = validate_partners(vec![partner("  Acme ")]).unwrap();
        assert_eq!(validated[0].name, "Acme");
    }

    #[test]
    fn reports_index_and_field_of_first_missing_value() {
        let mut broken = partner("Globex");
        broken.website_url = "   ".to_string();

        let err = validate_partners(vec![partner("Acme"), broken]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::validation("partners[1].website_url is required")
        );
    }

    #[test]
    fn whitespace_only_title_is_rejected() {
        let product = ShopProductDraft {
            title: " \t".to_string(),
            description: "Ultrabook".to_string(),
            logo_src: "/imgs/laptop/x.png".to_string(),
            logo_alt: "X".to_string(),
            order_index: 0,
        };

        let err = validate_shop_products(vec![product]).unwrap_err();
        assert!(matches!(err, CatalogError::Validation { ref message } if message == "products[0].title is required"));
    }

    #[test]
    fn empty_sequence_is_valid() {
        assert!(validate_shop_products(Vec::new()).unwrap().is_empty());
    }
}
