/// Display module
///
/// This module handles everything between a drawn photo path and the
/// hosting page:
/// - The image markup fragment (fragment.rs)
/// - The page model and mount slot lookup (mount.rs)
/// - The load sequence that ties the two together

pub mod fragment;
pub mod mount;

use crate::picker::catalog::{ImageCatalog, Selection};
use crate::picker::random::RandomSource;
use self::fragment::ImageFragment;
use self::mount::{DisplayError, DisplayMount};

/// Id of the page slot that receives the rendered image
pub const MOUNT_ID: &str = "random-dog-image-container";

/// Run the load sequence: draw one photo and mount it.
///
/// Looks up the [`MOUNT_ID`] slot in `page`, draws one path from
/// `catalog` and writes the rendered image markup into the slot,
/// replacing whatever it held before. Returns the drawn [`Selection`]
/// so the caller can mirror it natively.
///
/// If the slot is missing nothing is rendered and the page is left
/// untouched.
pub fn display_random_image<M, R>(
    catalog: &ImageCatalog,
    page: &mut M,
    random: &mut R,
) -> Result<Selection, DisplayError>
where
    M: DisplayMount,
    R: RandomSource,
{
    let slot = page
        .slot_mut(MOUNT_ID)
        .ok_or_else(|| DisplayError::MissingMount(MOUNT_ID.to_owned()))?;

    let selection = catalog.pick(random);
    let fragment = ImageFragment::new(selection.as_path());
    *slot = fragment.to_html();

    Ok(selection)
}
