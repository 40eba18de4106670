//! Static name mapping for the IRS W-8BEN form
//!
//! The AcroForm of the W-8BEN carries generated names such as
//! `topmostSubform[0].Page1[0].f_1[0]`. Extraction reports mapped fields under
//! the API names below; the mapping key stays the fully-qualified name.

/// One entry of the name mapping table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMapping {
    /// Fully-qualified field name inside the PDF
    pub form_field_name: &'static str,
    /// Name exposed to API consumers
    pub api_name: &'static str,
}

impl FieldMapping {
    const fn new(form_field_name: &'static str, api_name: &'static str) -> Self {
        Self {
            form_field_name,
            api_name,
        }
    }
}

static W8BEN_FIELD_MAPPINGS: &[FieldMapping] = &[
    // Part I - Identification of Beneficial Owner
    FieldMapping::new("topmostSubform[0].Page1[0].f_1[0]", "name"),
    FieldMapping::new("topmostSubform[0].Page1[0].f_2[0]", "countryOfCitizenship"),
    FieldMapping::new("topmostSubform[0].Page1[0].f_3[0]", "permanentResidenceAddress"),
    FieldMapping::new("topmostSubform[0].Page1[0].f_4[0]", "permanentResidenceCity"),
    FieldMapping::new("topmostSubform[0].Page1[0].f_5[0]", "permanentResidenceCountry"),
    FieldMapping::new("topmostSubform[0].Page1[0].f_6[0]", "mailingAddress"),
    FieldMapping::new("topmostSubform[0].Page1[0].f_7[0]", "mailingCity"),
    FieldMapping::new("topmostSubform[0].Page1[0].f_8[0]", "mailingCountry"),
    FieldMapping::new("topmostSubform[0].Page1[0].f_9[0]", "usTaxpayerIdentificationNumber"),
    FieldMapping::new("topmostSubform[0].Page1[0].f_10[0]", "foreignTaxIdentifyingNumber"),
    FieldMapping::new("topmostSubform[0].Page1[0].c1_01[0]", "ftinNotLegallyRequired"),
    FieldMapping::new("topmostSubform[0].Page1[0].f_11[0]", "referenceNumbers"),
    FieldMapping::new("topmostSubform[0].Page1[0].f_12[0]", "dateOfBirth"),
    // Part II - Claim of Tax Treaty Benefits
    FieldMapping::new("topmostSubform[0].Page1[0].f_13[0]", "treatyCountry"),
    FieldMapping::new("topmostSubform[0].Page1[0].f_14[0]", "treatyArticle"),
    FieldMapping::new("topmostSubform[0].Page1[0].f_15[0]", "treatyWithholdingRate"),
    FieldMapping::new("topmostSubform[0].Page1[0].f_16[0]", "treatyIncomeType"),
    FieldMapping::new("topmostSubform[0].Page1[0].f_17[0]", "treatyAdditionalConditions"),
    // Part III - Certification
    FieldMapping::new("topmostSubform[0].Page1[0].c1_02[0]", "capacityToSign"),
    FieldMapping::new("topmostSubform[0].Page1[0].Signature[0]", "signature"),
    FieldMapping::new("topmostSubform[0].Page1[0].Date[0]", "signatureDate"),
    FieldMapping::new("topmostSubform[0].Page1[0].f_18[0]", "signerName"),
];

/// All entries of the mapping table, in declaration order
pub fn field_mappings() -> &'static [FieldMapping] {
    W8BEN_FIELD_MAPPINGS
}

/// Look up the API name for a fully-qualified field name.
///
/// Matching is exact and case-sensitive; the first matching entry wins.
pub fn mapped_name(fully_qualified_name: &str) -> Option<&'static str> {
    W8BEN_FIELD_MAPPINGS
        .iter()
        .find(|mapping| mapping.form_field_name == fully_qualified_name)
        .map(|mapping| mapping.api_name)
}
