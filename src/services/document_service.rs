// src/services/document_service.rs

use std::sync::Arc;

use crate::{
    common::error::AppError,
    db::{document_repo::DocumentRow, store::RecordStore},
    models::document::{Document, DocumentType},
};

#[derive(Clone)]
pub struct DocumentService {
    store: Arc<dyn RecordStore>,
}

impl DocumentService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn list_documents(&self) -> Result<Vec<Document>, AppError> {
        let rows = self.store.list_documents().await?;
        rows.into_iter().map(map_document_row).collect()
    }
}

pub fn map_document_row(row: DocumentRow) -> Result<Document, AppError> {
    let document_id = row
        .document_id
        .filter(|d| !d.trim().is_empty())
        .ok_or_else(|| AppError::MappingError(format!("Dokument {} ohne document_id", row.id)))?;
    let uploaded_at = row
        .uploaded_at
        .ok_or_else(|| AppError::MappingError(format!("Dokument {document_id} ohne uploaded_at")))?;

    Ok(Document {
        id: row.id,
        document_id,
        case_id: row.case_id,
        document_type: DocumentType::from(row.document_type.unwrap_or_default()),
        filename: row.file_name.unwrap_or_default(),
        file_path: row.file_path.unwrap_or_default(),
        // tamanho negativo no banco é tratado como 0
        file_size: row.file_size.unwrap_or(0).max(0),
        mime_type: row.mime_type.unwrap_or_default(),
        description: row.description.filter(|d| !d.trim().is_empty()),
        uploaded_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn maps_file_name_and_clamps_size() {
        let document = map_document_row(DocumentRow {
            id: 9,
            document_id: Some("DOC-9".into()),
            document_type: Some("foto".into()),
            file_name: Some("front.jpg".into()),
            file_size: Some(-12),
            description: Some("".into()),
            uploaded_at: Some(Utc::now()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(document.filename, "front.jpg");
        assert_eq!(document.file_size, 0);
        assert_eq!(document.document_type, DocumentType::Schadenfotos);
        assert_eq!(document.description, None);
    }
}
