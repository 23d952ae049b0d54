//! Edit operations over the store and codec
//!
//! Every mutating operation follows the same cycle: compute the new variable
//! list from the snapshot, write it through [`ProfileStore::write`], then
//! rediscover. The caller's snapshot is never touched, so a failed
//! operation leaves it as the last known good state.

use std::path::Path;

use crate::codec::{decode_document, encode_document};
use crate::error::Result;
use crate::model::{Profile, ProfileDocument, Variable};
use crate::store::{check_profile_filename, profile_filename, ProfileStore};
use crate::utils::path::{read_file, write_atomic};

/// `variables` without `key`, then `(key, value)` appended at the end
pub fn with_added(variables: &[Variable], key: &str, value: &str) -> Vec<Variable> {
    let mut updated = without(variables, key);
    updated.push(Variable::new(key, value));
    updated
}

/// `variables` with the value of every `key` entry replaced in place
pub fn with_edited(variables: &[Variable], key: &str, new_value: &str) -> Vec<Variable> {
    variables
        .iter()
        .map(|v| {
            if v.key == key {
                Variable::new(v.key.clone(), new_value)
            } else {
                v.clone()
            }
        })
        .collect()
}

/// `variables` with every `key` entry removed
pub fn without(variables: &[Variable], key: &str) -> Vec<Variable> {
    variables.iter().filter(|v| v.key != key).cloned().collect()
}

/// Set `key` to `value`. An existing key moves to the end.
///
/// Keys are trimmed on entry, the same way parsed keys are.
pub fn add(store: &ProfileStore, profile: &Profile, key: &str, value: &str) -> Result<Vec<Profile>> {
    let key = key.trim();
    store.write(profile, &with_added(&profile.variables, key, value))?;
    tracing::info!(profile = %profile.name, key, "Added variable");
    Ok(store.discover())
}

/// Change the value of `key` in place. Unknown keys leave the list unchanged.
pub fn edit(
    store: &ProfileStore,
    profile: &Profile,
    key: &str,
    new_value: &str,
) -> Result<Vec<Profile>> {
    let key = key.trim();
    store.write(profile, &with_edited(&profile.variables, key, new_value))?;
    tracing::info!(profile = %profile.name, key, "Edited variable");
    Ok(store.discover())
}

/// Remove every declaration of `key`
pub fn delete(store: &ProfileStore, profile: &Profile, key: &str) -> Result<Vec<Profile>> {
    let key = key.trim();
    store.write(profile, &without(&profile.variables, key))?;
    tracing::info!(profile = %profile.name, key, "Deleted variable");
    Ok(store.discover())
}

/// Replace the declarations of the document's profile with its variables.
///
/// The target is `home/<filename>` where short names such as `zshrc` map to
/// their dotfile. The file is created if missing. Existing declarations are
/// replaced, not merged. Names that would escape the home directory are
/// rejected before anything is written.
pub fn import(store: &ProfileStore, document: &ProfileDocument) -> Result<Vec<Profile>> {
    let filename = check_profile_filename(profile_filename(&document.profile_name))?;
    let target = Profile::at(store.home(), filename);

    store.ensure_exists(&target.path)?;
    store.write(&target, &document.variables)?;

    tracing::info!(
        profile = %filename,
        variables = document.variables.len(),
        "Imported variables"
    );
    Ok(store.discover())
}

/// Read and decode a document file, then [`import`] it.
///
/// Decoding happens before any profile is touched.
pub fn import_file(store: &ProfileStore, input: &Path) -> Result<(ProfileDocument, Vec<Profile>)> {
    let json = read_file(input)?;
    let document = decode_document(&json)?;
    let profiles = import(store, &document)?;
    Ok((document, profiles))
}

/// Snapshot a profile's variables as an interchange document
pub fn export(profile: &Profile) -> ProfileDocument {
    ProfileDocument::from(profile)
}

/// Export a profile to `output` as pretty-printed JSON
pub fn export_file(profile: &Profile, output: &Path) -> Result<ProfileDocument> {
    let document = export(profile);
    write_atomic(output, &encode_document(&document)?)?;
    tracing::info!(profile = %profile.name, output = %output.display(), "Exported variables");
    Ok(document)
}
