pub mod prompts;

pub use prompts::{
    prompt_credentials, prompt_overwrite_confirmation, prompt_profile_name,
    prompt_profile_selection, prompt_remove_principal_confirmation,
    prompt_remove_profile_confirmation,
};
