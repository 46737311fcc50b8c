//! Field extraction on well-formed and truncated sentences.
use super::*;

#[test]
/// Every field of a first fragment is reachable.
fn test_tokenize_first_fragment() {
    let raw = "!AIVDM,2,1,3,B,55P5TL01VIaAL@7WKO@mBplU@<PDhh000000001S;AJ::4A80?4i@E53,0*3E";
    let sentence = AisSentence::tokenize(raw);

    assert_eq!(sentence.raw(), raw);
    assert_eq!(sentence.len(), FIELD_COUNT);
    assert_eq!(sentence.field(TAG_FIELD), Some("!AIVDM"));
    assert_eq!(sentence.identifier(), Some("AIVD"));
    assert_eq!(sentence.total(), Ok(2));
    assert_eq!(sentence.index(), Ok(1));
    assert_eq!(sentence.sequence_id(), "3");
    assert_eq!(sentence.channel(), "B");
    assert_eq!(
        sentence.payload(),
        Ok("55P5TL01VIaAL@7WKO@mBplU@<PDhh000000001S;AJ::4A80?4i@E53")
    );
    assert_eq!(sentence.padding(), Ok(0));
}

#[test]
/// Without a padding field the checksum suffix never leaks into the payload.
fn test_tokenize_without_padding_field() {
    let sentence = AisSentence::tokenize("!AIVDM,1,1,,B,15NPOOPP00G?5ABEdu>pEowb0*78");

    assert_eq!(sentence.len(), 6);
    assert_eq!(sentence.payload(), Ok("15NPOOPP00G?5ABEdu>pEowb0"));
    assert_eq!(sentence.sequence_id(), "");
    assert_eq!(sentence.padding(), Ok(0));
}

#[test]
/// Truncated sentences report the first missing field.
fn test_missing_fields() {
    let sentence = AisSentence::tokenize("!AIVDM,1,1,,B*15");
    assert_eq!(
        sentence.payload(),
        Err(RouterError::MissingField { index: PAYLOAD_FIELD })
    );

    let sentence = AisSentence::tokenize("!AIVDM*00");
    assert_eq!(
        sentence.total(),
        Err(RouterError::MissingField { index: TOTAL_FIELD })
    );
}

#[test]
/// Fragment totals outside 1..=9 are malformed.
fn test_total_bounds() {
    for raw in ["!AIVDM,0,1,3,B,1@00,0*66", "!AIVDM,12,1,3,B,1@00,0*55", "!AIVDM,x,1,,B,1,0*00"] {
        assert!(matches!(
            AisSentence::tokenize(raw).total(),
            Err(RouterError::MalformedFragmentCount { .. })
        ));
    }
}

#[test]
/// Non-numeric indexes carry the offending value.
fn test_malformed_index() {
    let sentence = AisSentence::tokenize("!AIVDM,2,x,3,B,1@0000000000000,2*1F");
    assert_eq!(
        sentence.index(),
        Err(RouterError::MalformedFragmentIndex { value: "x".into() })
    );
}

#[test]
/// Numeric indexes parse whatever their range.
fn test_numeric_index_out_of_range() {
    assert_eq!(
        AisSentence::tokenize("!AIVDM,2,300,3,B,1@0000000000000,2*54").index(),
        Ok(300)
    );
    assert_eq!(
        AisSentence::tokenize("!AIVDM,2,-1,3,B,1@0000000000000,2*7B").index(),
        Ok(-1)
    );
}

#[test]
/// Only the first padding character is significant, and it must be 0..=5.
fn test_padding_values() {
    assert_eq!(AisSentence::tokenize("!AIVDM,2,2,3,B,1@0000000000000,2*55").padding(), Ok(2));
    assert_eq!(AisSentence::tokenize("!AIVDM,1,1,,B,1,5x*00").padding(), Ok(5));
    assert_eq!(
        AisSentence::tokenize("!AIVDM,2,2,3,B,1@0000000000000,9*5E").padding(),
        Err(RouterError::MalformedPadding { value: "9".into() })
    );
    assert_eq!(
        AisSentence::tokenize("!AIVDM,1,1,,B,1,-*00").padding(),
        Err(RouterError::MalformedPadding { value: "-".into() })
    );
}
