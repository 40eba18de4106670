//! Helpers for assembling small test PDFs with correct xref offsets

/// Builds a single-revision PDF from object bodies.
///
/// Object 1 is the catalog and object 2 an empty page tree; further objects
/// are numbered in the order they are added or reserved.
#[derive(Debug, Clone)]
pub struct PdfBuilder {
    objects: Vec<String>,
    catalog_entries: String,
}

impl Default for PdfBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfBuilder {
    pub fn new() -> Self {
        Self {
            objects: vec![
                String::new(),
                "<< /Type /Pages /Kids [] /Count 0 >>".to_string(),
            ],
            catalog_entries: String::new(),
        }
    }

    /// Add an object and return its object number
    pub fn add_object(&mut self, body: &str) -> u32 {
        self.objects.push(body.to_string());
        self.objects.len() as u32
    }

    /// Reserve an object number to be filled with [`PdfBuilder::set_object`]
    pub fn reserve(&mut self) -> u32 {
        self.add_object("null")
    }

    pub fn set_object(&mut self, number: u32, body: &str) {
        self.objects[number as usize - 1] = body.to_string();
    }

    /// Extra catalog entries, e.g. `/AcroForm 3 0 R`
    pub fn set_catalog_entries(&mut self, entries: &str) {
        self.catalog_entries = entries.to_string();
    }

    pub fn build(&self) -> Vec<u8> {
        let mut content = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::with_capacity(self.objects.len());

        for (index, body) in self.objects.iter().enumerate() {
            let body = if index == 0 {
                format!("<< /Type /Catalog /Pages 2 0 R {} >>", self.catalog_entries)
            } else {
                body.clone()
            };
            offsets.push(content.len());
            content.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", index + 1, body).as_bytes());
        }

        let xref_start = content.len();
        let size = self.objects.len() + 1;
        let mut xref = format!("xref\n0 {size}\n0000000000 65535 f \n");
        for offset in offsets {
            xref.push_str(&format!("{offset:010} 00000 n \n"));
        }
        xref.push_str(&format!(
            "trailer\n<< /Size {size} /Root 1 0 R >>\nstartxref\n{xref_start}\n%%EOF"
        ));
        content.extend_from_slice(xref.as_bytes());
        content
    }
}

/// A PDF without an interactive form
pub fn create_pdf_without_form() -> Vec<u8> {
    PdfBuilder::new().build()
}

/// A W-8BEN style form: a `topmostSubform[0]` container holding a `Page1[0]`
/// container with two text fields, a check box, a signature and a choice field.
pub fn create_w8ben_form_pdf() -> Vec<u8> {
    let mut pdf = PdfBuilder::new();

    let root = pdf.reserve();
    let page = pdf.reserve();
    let name = pdf.add_object(&format!(
        "<< /FT /Tx /T (f_1[0]) /Parent {page} 0 R /V (Jan Novak) >>"
    ));
    let country = pdf.add_object(&format!(
        "<< /FT /Tx /T (f_2[0]) /Parent {page} 0 R /V <FEFF010C00650073006B006F> >>"
    ));
    let ftin = pdf.add_object(&format!(
        "<< /FT /Btn /T (c1_01[0]) /Parent {page} 0 R /V /1 /AS /1 /AP << /N << /1 << >> /Off << >> >> >> >>"
    ));
    let signature = pdf.add_object(&format!("<< /FT /Sig /T (Signature[0]) /Parent {page} 0 R >>"));
    let remarks = pdf.add_object(&format!(
        "<< /FT /Ch /T (Remarks[0]) /Parent {page} 0 R /Opt [(A) (B)] /V (A) >>"
    ));

    pdf.set_object(
        page,
        &format!(
            "<< /T (Page1[0]) /Parent {root} 0 R /Kids [{name} 0 R {country} 0 R {ftin} 0 R {signature} 0 R {remarks} 0 R] >>"
        ),
    );
    pdf.set_object(root, &format!("<< /T (topmostSubform[0]) /Kids [{page} 0 R] >>"));

    let acro_form = pdf.add_object(&format!("<< /Fields [{root} 0 R] /DA (/Helv 0 Tf 0 g) >>"));
    pdf.set_catalog_entries(&format!("/AcroForm {acro_form} 0 R"));
    pdf.build()
}
