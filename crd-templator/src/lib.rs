mod attributes;
mod crd;
mod errors;
mod generate;
mod naming;
mod read;
mod structs;

pub use attributes::{crd_attributes, map_kind, resource_schema};
pub use crd::{served_versions, CrdVersionSpec};
pub use errors::GeneratorError;
pub use generate::{
    generate_mod_source, generate_modules, generate_resource_source, generate_to_dir,
    render_attribute, GenerateOptions, GeneratedModule,
};
pub use naming::{module_name, struct_name, type_name_suffix};
pub use read::{parse_crds, read_crds, read_crds_from_dir, read_crds_from_file};
pub use structs::{struct_model, FieldDef, StructDef};
