pub mod id_util;
pub mod task_util;
