pub mod gotrue;
pub mod provider;
