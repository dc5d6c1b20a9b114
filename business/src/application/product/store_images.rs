use crate::domain::logger::Logger;
use crate::domain::product::image_store::ImageStore;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::upload_images::ImageUpload;

/// Folds a batch of uploads into stored files and image records, one file
/// at a time: save the bytes, then insert the record pointing at them.
/// A file that fails the store's policy or cannot be written is logged
/// and skipped; the batch itself never fails. Returns the accepted image
/// URLs in arrival order.
pub(crate) async fn store_images(
    repository: &dyn ProductRepository,
    image_store: &dyn ImageStore,
    logger: &dyn Logger,
    product_id: i64,
    files: &[ImageUpload],
) -> Vec<String> {
    let mut accepted = Vec::new();

    for file in files {
        let image_url = match image_store.save(&file.bytes, &file.file_name).await {
            Ok(url) => url,
            Err(err) => {
                logger.warn(&format!(
                    "Skipping image '{}' for product {}: {}",
                    file.file_name, product_id, err
                ));
                continue;
            }
        };

        match repository.insert_image(product_id, &image_url).await {
            Ok(_) => accepted.push(image_url),
            Err(err) => {
                // The file is on disk with no record: an orphaned file,
                // tolerated but logged loudly.
                logger.error(&format!(
                    "Stored file {} but failed to record it for product {}: {}",
                    image_url, product_id, err
                ));
            }
        }
    }

    accepted
}
