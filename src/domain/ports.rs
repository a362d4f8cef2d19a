use crate::core::convert;
use crate::domain::model::{
    EntityKind, Extraction, Framework, Record, TransformResult, VehicleDefaults,
};
use crate::utils::error::Result;

/// Read/write access to the destination directory. Writing truncates and
/// replaces the target; there is no backup or versioning.
pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

/// Everything a conversion run needs from its caller. The GUI or CLI layer
/// owns the selection; the core only ever sees these explicit values.
pub trait ConfigProvider {
    fn output_path(&self) -> &str;
    fn framework(&self) -> Framework;
    fn item_weight(&self) -> i64;
    fn vehicle_defaults(&self) -> VehicleDefaults;

    /// Destination file name for one entity kind under the active framework.
    fn output_file(&self, entity: EntityKind) -> String {
        convert::default_output_name(entity, self.framework())
    }
}

/// One conversion run: extract a record stream, render it for the active
/// framework, write the result. Synchronous and stateless; any failure
/// aborts the run.
pub trait Pipeline {
    fn extract(&self) -> Result<Extraction>;
    fn transform(&self, records: Vec<Record>) -> Result<TransformResult>;
    fn load(&self, result: TransformResult) -> Result<String>;
}
