pub mod attachment_policy;
