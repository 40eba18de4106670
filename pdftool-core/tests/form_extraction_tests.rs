//! End-to-end extraction tests through the file system loader

use pdftool::forms::{field_mappings, FieldType, FormField};
use pdftool::test_helpers::{create_pdf_without_form, create_w8ben_form_pdf, PdfBuilder};
use pdftool::{extract_form_fields, FileSystemLoader, FormFieldService, PdfToolError};
use pretty_assertions::assert_eq;
use tempfile::{tempdir, TempDir};

fn setup_resources(files: &[(&str, Vec<u8>)]) -> TempDir {
    let dir = tempdir().expect("Failed to create temp directory");
    for (name, bytes) in files {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, bytes).unwrap();
    }
    dir
}

fn flat_form(field_count: usize) -> Vec<u8> {
    let mut pdf = PdfBuilder::new();
    let refs: Vec<String> = (0..field_count)
        .map(|i| {
            let number = pdf.add_object(&format!("<< /FT /Tx /T (field{i}) /V (value {i}) >>"));
            format!("{number} 0 R")
        })
        .collect();
    let acro_form = pdf.add_object(&format!("<< /Fields [{}] >>", refs.join(" ")));
    pdf.set_catalog_entries(&format!("/AcroForm {acro_form} 0 R"));
    pdf.build()
}

#[test]
fn test_document_without_acroform_is_empty() {
    let resources = setup_resources(&[("plain.pdf", create_pdf_without_form())]);
    let service = FormFieldService::new(FileSystemLoader::new(resources.path()));

    assert!(service.form_fields("plain.pdf").unwrap().is_empty());
}

#[test]
fn test_leaf_fields_produce_one_entry_each() {
    let fields = extract_form_fields(flat_form(5)).unwrap();

    assert_eq!(fields.len(), 5);
    for i in 0..5 {
        let key = format!("field{i}");
        assert_eq!(
            fields[&key],
            FormField::new(key.clone(), FieldType::Text).with_value(format!("value {i}"))
        );
    }
}

#[test]
fn test_containers_and_children_both_present() {
    let fields = extract_form_fields(create_w8ben_form_pdf()).unwrap();

    assert_eq!(fields["topmostSubform[0]"].field_type, FieldType::Other);
    assert_eq!(fields["topmostSubform[0].Page1[0]"].field_type, FieldType::Other);
    assert_eq!(
        fields["topmostSubform[0].Page1[0].f_1[0]"].field_type,
        FieldType::Text
    );
}

#[test]
fn test_mapped_fields_keep_original_keys() {
    let fields = extract_form_fields(create_w8ben_form_pdf()).unwrap();

    for mapping in field_mappings() {
        if let Some(field) = fields.get(mapping.form_field_name) {
            assert_eq!(field.name, mapping.api_name);
        }
        assert!(!fields.contains_key(mapping.api_name));
    }
    assert_eq!(fields["topmostSubform[0].Page1[0].f_1[0]"].name, "name");
}

#[test]
fn test_checkbox_has_only_checked_state() {
    let fields = extract_form_fields(create_w8ben_form_pdf()).unwrap();
    let checkbox = &fields["topmostSubform[0].Page1[0].c1_01[0]"];

    assert_eq!(checkbox.field_type, FieldType::Checkbox);
    assert_eq!(checkbox.checked, Some(true));
    assert_eq!(checkbox.value, None);
}

#[test]
fn test_missing_source_reports_not_found() {
    let resources = setup_resources(&[]);
    let service = FormFieldService::new(FileSystemLoader::new(resources.path()));

    match service.form_fields("forms/fw8ben.pdf") {
        Err(PdfToolError::SourceNotFound(source)) => assert_eq!(source, "forms/fw8ben.pdf"),
        other => panic!("Expected SourceNotFound, got {other:?}"),
    }
}

#[test]
fn test_nested_resource_path() {
    let resources = setup_resources(&[("forms/irs/fw8ben.pdf", create_w8ben_form_pdf())]);
    let service = FormFieldService::new(FileSystemLoader::new(resources.path()));

    let fields = service.form_fields("classpath:forms/irs/fw8ben.pdf").unwrap();
    assert_eq!(fields.len(), 7);
}

#[test]
fn test_non_pdf_resource_is_a_parse_error() {
    let resources = setup_resources(&[("notes.pdf", b"plain text, no header".to_vec())]);
    let service = FormFieldService::new(FileSystemLoader::new(resources.path()));

    assert!(matches!(
        service.form_fields("notes.pdf"),
        Err(PdfToolError::Parse(_))
    ));
}

#[test]
fn test_json_output_shape() {
    let fields = extract_form_fields(create_w8ben_form_pdf()).unwrap();
    let json = serde_json::to_value(&fields).unwrap();

    assert_eq!(
        json["topmostSubform[0].Page1[0].c1_01[0]"],
        serde_json::json!({ "name": "ftinNotLegallyRequired", "type": "CHECKBOX", "checked": true })
    );
    assert_eq!(
        json["topmostSubform[0]"],
        serde_json::json!({ "name": "topmostSubform[0]", "type": "OTHER" })
    );
}
