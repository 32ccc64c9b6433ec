//! Check command implementation.

use anyhow::Result;
use docjson::{Model, TypeDeclaration};
use std::path::Path;

/// Runs the check command.
pub fn run(path: &Path) -> Result<()> {
    let model = super::load_model(path)?;

    for line in summarize(&model) {
        println!("{line}");
    }
    Ok(())
}

/// One line per type plus a total line.
fn summarize(model: &Model) -> Vec<String> {
    let mut lines: Vec<String> = model.types.iter().map(describe).collect();

    let members: usize = model.types.iter().map(member_count).sum();
    let documented: usize = model.types.iter().map(documented_count).sum();
    lines.push(format!(
        "{} types, {} members ({} documented)",
        model.len(),
        members,
        documented
    ));
    lines
}

fn describe(ty: &TypeDeclaration) -> String {
    format!(
        "{}: {} constructors, {} fields, {} methods ({}/{} documented)",
        ty.name,
        ty.constructors.len(),
        ty.fields.len(),
        ty.methods.len(),
        documented_count(ty),
        member_count(ty)
    )
}

fn member_count(ty: &TypeDeclaration) -> usize {
    ty.constructors.len() + ty.fields.len() + ty.methods.len()
}

fn documented_count(ty: &TypeDeclaration) -> usize {
    let callables = ty
        .constructors
        .iter()
        .chain(&ty.methods)
        .filter(|c| c.doc.is_some())
        .count();
    let fields = ty.fields.iter().filter(|f| f.doc.is_some()).count();
    callables + fields
}
