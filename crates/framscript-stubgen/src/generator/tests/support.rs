use crate::{
  generator::{emitter::emit_stub, metrics::GenerationStats},
  schema::Schema,
};

pub(crate) const FIXTURE: &str = include_str!("../../../fixtures/framscript.xml");

/// Wraps `<type>` markup in a document and loads it.
pub(crate) fn schema_from_types(types: &str) -> Schema {
  Schema::from_xml(&format!("<framscript>{types}</framscript>")).unwrap()
}

pub(crate) fn emit(schema: &Schema) -> (String, GenerationStats) {
  let mut stats = GenerationStats::default();
  let code = emit_stub(schema, &mut stats).unwrap();
  (code, stats)
}

/// Stub text after the fixed header, i.e. only the emitted types.
pub(crate) fn emit_body(schema: &Schema) -> String {
  let (code, _) = emit(schema);
  code
    .split_once("class ExtValue: ...\n")
    .map(|(_, body)| body.trim_start_matches('\n').to_string())
    .unwrap()
}
