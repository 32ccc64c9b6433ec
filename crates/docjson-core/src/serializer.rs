//! Depth-first emission of a [`Model`] to a [`StructuredWriter`].
//!
//! Field names and their order form the output contract consumed by
//! downstream renderers:
//!
//! ```text
//! { "classes": [ {
//!     "name", "interfaces", "superclass", "description"?, "since"?, "see"?,
//!     "constructors": [ Callable ], "fields": [ Field ], "methods": [ Callable ]
//! } ] }
//!
//! Callable: "name", "description"?, "returns"? { "types", "description"? },
//!           "parameters": [ { "name", "types", "description"? } ],
//!           "throws": [ { "type", "description"? } ],
//!           "visibility", "static", "final"
//! Field:    "name", "description"?, "type", "visibility", "static", "final"
//! ```
//!
//! Optional fields are written only when the underlying documentation
//! exists. Any write error aborts the walk.

use crate::docs::DocComment;
use crate::matcher::TagMatcher;
use crate::model::{Callable, Field, Model, ModifierSet, TypeDeclaration};
use crate::writer::{StructuredWriter, WriteError};
use tracing::{debug, info, trace};

/// Serializes the whole model as one JSON document.
///
/// Types, and the members within each type, are written in model order.
/// Nothing is sorted, merged or skipped.
///
/// # Errors
///
/// Returns the first [`WriteError`] raised by `writer`; the document is
/// incomplete in that case.
pub fn serialize<W: StructuredWriter + ?Sized>(
    model: &Model,
    writer: &mut W,
) -> Result<(), WriteError> {
    info!("Serializing {} types", model.len());

    writer.begin_object()?;
    writer.begin_array_field("classes")?;
    for ty in &model.types {
        write_class(writer, ty)?;
    }
    writer.end_array()?;
    writer.end_object()?;

    info!("Serialization complete");
    Ok(())
}

fn write_class<W: StructuredWriter + ?Sized>(
    w: &mut W,
    ty: &TypeDeclaration,
) -> Result<(), WriteError> {
    debug!(
        "Writing {} ({} constructors, {} fields, {} methods)",
        ty.name,
        ty.constructors.len(),
        ty.fields.len(),
        ty.methods.len()
    );

    w.begin_object()?;
    w.string_field("name", &ty.name)?;

    let interfaces: Vec<&str> = ty.interface_names().collect();
    w.string_array_field("interfaces", &interfaces)?;
    w.string_field("superclass", ty.superclass_name())?;

    if let Some(doc) = &ty.doc {
        let tags = TagMatcher::new(doc);
        w.string_field("description", &doc.summary)?;
        w.opt_string_field("since", tags.since())?;
        w.string_array_field("see", tags.see())?;
    }

    w.begin_array_field("constructors")?;
    for ctor in &ty.constructors {
        write_callable(w, ctor)?;
    }
    w.end_array()?;

    w.begin_array_field("fields")?;
    for field in &ty.fields {
        write_field(w, field)?;
    }
    w.end_array()?;

    w.begin_array_field("methods")?;
    for method in &ty.methods {
        write_callable(w, method)?;
    }
    w.end_array()?;

    w.end_object()
}

fn write_callable<W: StructuredWriter + ?Sized>(
    w: &mut W,
    callable: &Callable,
) -> Result<(), WriteError> {
    trace!("Writing callable {}", callable.name);
    let tags = TagMatcher::for_doc(callable.doc.as_ref());

    w.begin_object()?;
    w.string_field("name", &callable.name)?;
    w.opt_string_field("description", summary(callable.doc.as_ref()))?;

    if let Some(return_type) = &callable.return_type {
        let rendered = return_type.render();
        w.begin_object_field("returns")?;
        w.string_array_field("types", &[rendered.as_str()])?;
        w.opt_string_field("description", tags.returns())?;
        w.end_object()?;
    }

    w.begin_array_field("parameters")?;
    for param in &callable.parameters {
        let rendered = param.ty.render();
        w.begin_object()?;
        w.string_field("name", &param.name)?;
        w.string_array_field("types", &[rendered.as_str()])?;
        w.opt_string_field("description", tags.param(&param.name))?;
        w.end_object()?;
    }
    w.end_array()?;

    w.begin_array_field("throws")?;
    for thrown in &callable.thrown {
        let rendered = thrown.render();
        w.begin_object()?;
        w.string_field("type", &rendered)?;
        w.opt_string_field("description", tags.throws(&rendered))?;
        w.end_object()?;
    }
    w.end_array()?;

    write_modifiers(w, &callable.modifiers)?;
    w.end_object()
}

fn write_field<W: StructuredWriter + ?Sized>(w: &mut W, field: &Field) -> Result<(), WriteError> {
    trace!("Writing field {}", field.name);

    w.begin_object()?;
    w.string_field("name", &field.name)?;
    w.opt_string_field("description", summary(field.doc.as_ref()))?;
    w.string_field("type", &field.ty.render())?;
    write_modifiers(w, &field.modifiers)?;
    w.end_object()
}

fn write_modifiers<W: StructuredWriter + ?Sized>(
    w: &mut W,
    modifiers: &ModifierSet,
) -> Result<(), WriteError> {
    w.string_field("visibility", modifiers.visibility().as_str())?;
    w.bool_field("static", modifiers.is_static())?;
    w.bool_field("final", modifiers.is_final())
}

fn summary(doc: Option<&DocComment>) -> Option<&str> {
    doc.map(|d| d.summary.as_str())
}
