pub mod create_ad;
pub mod job_status;
