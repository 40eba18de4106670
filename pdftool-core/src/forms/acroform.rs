//! Reading the AcroForm field tree according to ISO 32000-1 Section 12.7.3
//!
//! Builds a [`FieldNode`] tree from the `/AcroForm /Fields` array of a parsed
//! document. Inheritable attributes (`/FT`, `/Ff`, `/V`) are carried down the
//! hierarchy, and every node is classified into a [`FieldKind`] variant.

use super::text_string::decode_text_string;
use super::tree::{FieldKind, FieldNode};
use crate::error::{PdfToolError, Result};
use bitflags::bitflags;
use oxidize_pdf::parser::{PdfDictionary, PdfObject, PdfReader};
use std::collections::HashSet;
use std::io::{Read, Seek};
use tracing::{debug, trace, warn};

/// Maximum nesting of the field hierarchy
const MAX_DEPTH: usize = 64;

/// Maximum chain of indirect references followed for one object
const MAX_REFERENCE_HOPS: usize = 32;

type ObjectId = (u32, u16);

bitflags! {
    /// Field flags (`/Ff`) from ISO 32000-1 Tables 221 and 226
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct FieldFlags: u32 {
        const READ_ONLY = 1 << 0;
        const REQUIRED = 1 << 1;
        const NO_EXPORT = 1 << 2;
        const NO_TOGGLE_TO_OFF = 1 << 14;
        const RADIO = 1 << 15;
        const PUSH_BUTTON = 1 << 16;
        const RADIOS_IN_UNISON = 1 << 25;
    }
}

/// Attributes a field inherits from its ancestors
#[derive(Debug, Clone, Default)]
struct Inherited {
    name: Option<String>,
    field_type: Option<String>,
    flags: FieldFlags,
    value: Option<PdfObject>,
}

/// Read the field tree of a document.
///
/// Returns an empty tree when the catalog has no `/AcroForm` or the form has
/// no `/Fields`.
pub fn read_field_tree<R: Read + Seek>(reader: &mut PdfReader<R>) -> Result<Vec<FieldNode>> {
    FieldTreeReader::new(reader).read()
}

/// Walks the field hierarchy of one document
pub struct FieldTreeReader<'a, R: Read + Seek> {
    reader: &'a mut PdfReader<R>,
    /// Objects on the path from the root to the node being read
    ancestors: HashSet<ObjectId>,
}

impl<'a, R: Read + Seek> FieldTreeReader<'a, R> {
    pub fn new(reader: &'a mut PdfReader<R>) -> Self {
        Self {
            reader,
            ancestors: HashSet::new(),
        }
    }

    /// Read the top-level fields and their descendants
    pub fn read(mut self) -> Result<Vec<FieldNode>> {
        let catalog = self.reader.catalog()?.clone();

        let acro_form = match catalog.get("AcroForm") {
            Some(obj) => self.resolve(obj)?,
            None => {
                debug!("Document has no AcroForm");
                return Ok(Vec::new());
            }
        };

        let acro_form = match acro_form {
            PdfObject::Dictionary(dict) => dict,
            PdfObject::Null => {
                debug!("AcroForm entry is null");
                return Ok(Vec::new());
            }
            _ => return Err(PdfToolError::Parse("AcroForm is not a dictionary".to_string())),
        };

        let fields = match acro_form.get("Fields") {
            Some(obj) => self.resolve_array(obj, "Fields")?,
            None => {
                debug!("AcroForm has no Fields array");
                return Ok(Vec::new());
            }
        };

        let root = Inherited::default();
        let mut nodes = Vec::with_capacity(fields.len());
        for entry in &fields {
            if let Some((id, dict)) = self.load_field(entry)? {
                nodes.extend(self.read_node(id, &dict, &root, 0)?);
            }
        }

        debug!(
            "Read {} top-level fields ({} nodes)",
            nodes.len(),
            nodes.iter().map(FieldNode::count).sum::<usize>()
        );
        Ok(nodes)
    }

    /// Read one field and its descendants.
    ///
    /// Returns `None` for a terminal field without a field type anywhere in
    /// its ancestry. A field reached twice along different paths is read
    /// twice; only a field that is its own ancestor is an error.
    fn read_node(
        &mut self,
        id: Option<ObjectId>,
        dict: &PdfDictionary,
        parent: &Inherited,
        depth: usize,
    ) -> Result<Option<FieldNode>> {
        if depth > MAX_DEPTH {
            return Err(PdfToolError::Parse(format!(
                "Field hierarchy deeper than {MAX_DEPTH} levels"
            )));
        }
        if let Some(id) = id {
            if !self.ancestors.insert(id) {
                return Err(PdfToolError::Parse(format!(
                    "Circular reference in field tree at object {} {} R",
                    id.0, id.1
                )));
            }
        }

        let node = self.read_field_contents(dict, parent, depth);

        if let Some(id) = id {
            self.ancestors.remove(&id);
        }
        node
    }

    fn read_field_contents(
        &mut self,
        dict: &PdfDictionary,
        parent: &Inherited,
        depth: usize,
    ) -> Result<Option<FieldNode>> {
        let inherited = self.inherit(dict, parent)?;
        let name = inherited.name.clone().unwrap_or_default();

        let kids = match dict.get("Kids") {
            Some(obj) => {
                let mut kids = Vec::new();
                for entry in self.resolve_array(obj, "Kids")? {
                    if let Some(kid) = self.load_field(&entry)? {
                        kids.push(kid);
                    }
                }
                kids
            }
            None => Vec::new(),
        };

        if kids.iter().any(|(_, kid)| kid.contains_key("T")) {
            trace!("Container field '{}' with {} kids", name, kids.len());
            let mut children = Vec::with_capacity(kids.len());
            for (kid_id, kid) in &kids {
                children.extend(self.read_node(*kid_id, kid, &inherited, depth + 1)?);
            }
            return Ok(Some(FieldNode::container(name, children)));
        }

        if inherited.field_type.is_none() {
            warn!("Skipping field '{}' without a field type", name);
            return Ok(None);
        }

        let kind = self.classify(dict, &kids, &inherited)?;
        trace!("Terminal field '{}': {:?}", name, kind);
        Ok(Some(FieldNode {
            fully_qualified_name: name,
            kind,
        }))
    }

    fn inherit(&mut self, dict: &PdfDictionary, parent: &Inherited) -> Result<Inherited> {
        let partial_name = match dict.get("T") {
            Some(obj) => match self.resolve(obj)? {
                PdfObject::String(s) => Some(decode_text_string(s.as_bytes())),
                _ => None,
            },
            None => None,
        };

        let name = match (&parent.name, partial_name) {
            (Some(parent_name), Some(partial)) => Some(format!("{parent_name}.{partial}")),
            (None, Some(partial)) => Some(partial),
            (parent_name, None) => parent_name.clone(),
        };

        let field_type = match dict.get("FT") {
            Some(obj) => self
                .resolve(obj)?
                .as_name()
                .map(|n| n.as_str().to_string())
                .or_else(|| parent.field_type.clone()),
            None => parent.field_type.clone(),
        };

        let flags = match dict.get("Ff") {
            Some(obj) => self
                .resolve(obj)?
                .as_integer()
                .map(|ff| FieldFlags::from_bits_truncate(ff as u32))
                .unwrap_or(parent.flags),
            None => parent.flags,
        };

        let value = match dict.get("V") {
            Some(obj) => Some(obj.clone()),
            None => parent.value.clone(),
        };

        Ok(Inherited {
            name,
            field_type,
            flags,
            value,
        })
    }

    fn classify(
        &mut self,
        dict: &PdfDictionary,
        widgets: &[(Option<ObjectId>, PdfDictionary)],
        inherited: &Inherited,
    ) -> Result<FieldKind> {
        let kind = match inherited.field_type.as_deref() {
            Some("Tx") => FieldKind::Text {
                value: self.text_value(inherited)?,
            },
            Some("Btn")
                if !inherited
                    .flags
                    .intersects(FieldFlags::RADIO | FieldFlags::PUSH_BUTTON) =>
            {
                FieldKind::CheckBox {
                    checked: self.is_checked(dict, widgets, inherited)?,
                }
            }
            Some("Sig") => FieldKind::Signature {
                value: self.signature_value(inherited)?,
            },
            _ => FieldKind::Other,
        };
        Ok(kind)
    }

    fn text_value(&mut self, inherited: &Inherited) -> Result<String> {
        let value = match &inherited.value {
            Some(obj) => self.resolve(obj)?,
            None => return Ok(String::new()),
        };

        match value {
            PdfObject::Null => Ok(String::new()),
            PdfObject::String(s) => Ok(decode_text_string(s.as_bytes())),
            PdfObject::Name(n) => Ok(n.as_str().to_string()),
            PdfObject::Integer(i) => Ok(i.to_string()),
            PdfObject::Real(r) => Ok(r.to_string()),
            PdfObject::Stream(stream) => {
                let data = stream.decode(self.reader.options())?;
                Ok(decode_text_string(&data))
            }
            other => {
                warn!(
                    "Value of field '{}' is not a text string: {:?}",
                    inherited.name.as_deref().unwrap_or_default(),
                    other
                );
                Ok(String::new())
            }
        }
    }

    /// Checked when `/V` names one of the on-states declared in `/AP /N`
    fn is_checked(
        &mut self,
        dict: &PdfDictionary,
        widgets: &[(Option<ObjectId>, PdfDictionary)],
        inherited: &Inherited,
    ) -> Result<bool> {
        let state = match &inherited.value {
            Some(obj) => match self.resolve(obj)? {
                PdfObject::Name(n) => n.as_str().to_string(),
                _ => return Ok(false),
            },
            None => return Ok(false),
        };

        if state == "Off" {
            return Ok(false);
        }

        let mut on_states = self.on_states(dict)?;
        for (_, widget) in widgets {
            on_states.extend(self.on_states(widget)?);
        }

        Ok(on_states.contains(&state))
    }

    /// Appearance state names other than `Off` declared in `/AP /N`
    fn on_states(&mut self, widget: &PdfDictionary) -> Result<HashSet<String>> {
        let mut states = HashSet::new();

        let appearance = match widget.get("AP") {
            Some(obj) => self.resolve(obj)?,
            None => return Ok(states),
        };
        let normal = match appearance.as_dict().and_then(|ap| ap.get("N")) {
            Some(obj) => self.resolve(obj)?,
            None => return Ok(states),
        };

        if let PdfObject::Dictionary(normal) = normal {
            for key in normal.0.keys() {
                if key.as_str() != "Off" {
                    states.insert(key.as_str().to_string());
                }
            }
        }
        Ok(states)
    }

    fn signature_value(&mut self, inherited: &Inherited) -> Result<String> {
        let signature = match &inherited.value {
            Some(obj) => self.resolve(obj)?,
            None => return Ok(String::new()),
        };

        let signer = match signature.as_dict().and_then(|sig| sig.get("Name")) {
            Some(obj) => self.resolve(obj)?,
            None => return Ok(String::new()),
        };

        Ok(signer
            .as_string()
            .map(|s| decode_text_string(s.as_bytes()))
            .unwrap_or_default())
    }

    /// Resolve a field entry to its dictionary; null entries are skipped
    fn load_field(&mut self, entry: &PdfObject) -> Result<Option<(Option<ObjectId>, PdfDictionary)>> {
        let id = entry.as_reference();
        match self.resolve(entry)? {
            PdfObject::Dictionary(dict) => Ok(Some((id, dict))),
            PdfObject::Null => {
                warn!("Skipping null entry in field array");
                Ok(None)
            }
            _ => Err(PdfToolError::Parse(
                "Field entry is not a dictionary".to_string(),
            )),
        }
    }

    fn resolve_array(&mut self, obj: &PdfObject, key: &str) -> Result<Vec<PdfObject>> {
        match self.resolve(obj)? {
            PdfObject::Array(array) => Ok(array.0),
            PdfObject::Null => Ok(Vec::new()),
            _ => Err(PdfToolError::Parse(format!("{key} is not an array"))),
        }
    }

    /// Follow indirect references until a direct object is reached
    fn resolve(&mut self, obj: &PdfObject) -> Result<PdfObject> {
        let mut current = obj.clone();
        for _ in 0..MAX_REFERENCE_HOPS {
            match current.as_reference() {
                Some((obj_num, gen_num)) => {
                    current = self.reader.get_object(obj_num, gen_num)?.clone();
                }
                None => return Ok(current),
            }
        }
        Err(PdfToolError::Parse(
            "Too many chained indirect references".to_string(),
        ))
    }
}
