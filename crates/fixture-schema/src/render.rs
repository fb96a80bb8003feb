use schemars::schema::RootSchema;
use typify::{TypeSpace, TypeSpaceSettings};

use crate::error::GeneratorError;

/// Render a schema as Rust type definitions
pub fn render_rust(schema: RootSchema) -> Result<String, GeneratorError> {
    let mut type_space = TypeSpace::new(TypeSpaceSettings::default().with_struct_builder(false));
    type_space.add_root_schema(schema)?;

    let file = syn::parse2::<syn::File>(type_space.to_stream())?;

    Ok(prettyplease::unparse(&file))
}

/// Render a schema as a pretty-printed JSON Schema document
pub fn render_json_schema(schema: &RootSchema) -> Result<String, GeneratorError> {
    let mut text = serde_json::to_string_pretty(schema)?;
    text.push('\n');

    Ok(text)
}
