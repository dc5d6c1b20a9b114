#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.name_too_long")]
    NameTooLong,
    #[error("product.price_negative")]
    PriceNegative,
    #[error("product.quantity_negative")]
    QuantityNegative,
    #[error("product.not_found")]
    NotFound,
    #[error("product.image_not_found")]
    ImageNotFound,
    #[error("product.no_images_accepted")]
    NoImagesAccepted,
    /// A record exists whose invariant is broken, e.g. a product that can
    /// no longer be read back right after its row was inserted. Fatal to
    /// the current operation and never substituted with empty data.
    #[error("product.integrity_fault")]
    IntegrityFault,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
