use super::*;

#[test]
fn generate_matches_render_poster_document() {
    let doc = generate("hello", 400, 6).unwrap();
    let opts = PosterOptions::default().with_size(400).with_cells(6);
    let poster = render_poster("hello", &opts).unwrap();
    assert_eq!(doc, poster.document);
    assert_eq!(poster.params.cells, 6);
    assert_eq!(poster.seed, "hello");
}

#[test]
fn invalid_options_fail_before_rendering() {
    assert!(matches!(
        generate("hello", 0, 4),
        Err(PosterError::Validation(_))
    ));
    assert!(matches!(
        generate("hello", 400, 0),
        Err(PosterError::Validation(_))
    ));
}

#[test]
fn batch_rejects_zero_threads() {
    let err = render_batch(&["a"], &PosterOptions::default(), Some(0)).unwrap_err();
    assert!(matches!(err, PosterError::Validation(_)));
}

#[test]
fn batch_keeps_input_order() {
    let seeds = ["one", "two", "three"];
    let posters = render_batch(&seeds, &PosterOptions::default(), Some(2)).unwrap();
    let got = posters.iter().map(|p| p.seed.as_str()).collect::<Vec<_>>();
    assert_eq!(got, seeds);
}

#[test]
fn fingerprint_tracks_document_identity() {
    let opts = PosterOptions::default().with_cells(8);
    let a = render_poster("fp", &opts).unwrap();
    let b = render_poster("fp", &opts).unwrap();
    let c = render_poster("fp2", &opts).unwrap();
    assert_eq!(a.fingerprint, b.fingerprint);
    assert_ne!(a.fingerprint, c.fingerprint);
}
