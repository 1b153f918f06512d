//! Integration tests for resume input handling

use resumecraft::input::manager::InputManager;
use resumecraft::input::InputSource;
use resumecraft::ResumeCraftError;
use std::path::{Path, PathBuf};

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("React"));
    assert!(text.contains("Node.js"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("React"));
    assert!(text.contains("Node.js"));
    // Markdown syntax is gone, bullets survive as glyphs
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
    assert!(!text.contains("]("));
    assert!(text.contains("• Built a React design system"));
}

#[tokio::test]
async fn test_markdown_and_text_parse_alike() {
    let mut manager = InputManager::new();
    let txt = manager.extract_text(Path::new("tests/fixtures/sample_resume.txt")).await.unwrap();
    let md = manager.extract_text(Path::new("tests/fixtures/sample_resume.md")).await.unwrap();

    let from_txt = resumecraft::parse(&txt);
    let from_md = resumecraft::parse(&md);

    assert_eq!(from_txt.name, from_md.name);
    assert_eq!(from_txt.email, from_md.email);
    assert_eq!(from_txt.phone, from_md.phone);
    assert_eq!(from_txt.linkedin, from_md.linkedin);
    assert_eq!(from_txt.skills, from_md.skills);
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_cache_disabled() {
    let mut manager = InputManager::new().with_cache(false);
    manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();

    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/unsupported.xyz");

    let result = manager.extract_text(path).await;
    assert!(matches!(result, Err(ResumeCraftError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_binary_formats_rejected_with_paste_hint() {
    let mut manager = InputManager::new();

    for name in ["resume.pdf", "resume.doc", "resume.docx", "resume.rtf", "resume.odt"] {
        let err = manager.extract_text(Path::new(name)).await.unwrap_err();
        let message = err.to_string();
        assert!(matches!(err, ResumeCraftError::UnsupportedFormat(_)), "{}", name);
        assert!(message.contains("Please paste the resume as plain text instead."), "{}", message);
    }
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let result = manager.extract_text(path).await;
    assert!(matches!(result, Err(ResumeCraftError::InvalidInput(_))));
}

#[tokio::test]
async fn test_blank_file_rejected() {
    let mut manager = InputManager::new();
    let source = InputSource::from(PathBuf::from("tests/fixtures/blank.txt"));

    let err = manager.read_resume(&source).await.unwrap_err();
    assert!(matches!(err, ResumeCraftError::EmptyInput));
}

#[tokio::test]
async fn test_read_resume_from_file() {
    let mut manager = InputManager::new();
    let source = InputSource::from(PathBuf::from("tests/fixtures/sample_resume.txt"));

    let text = manager.read_resume(&source).await.unwrap();
    assert!(text.starts_with("John Doe"));
    assert_eq!(source.display_name(), "tests/fixtures/sample_resume.txt");
}
