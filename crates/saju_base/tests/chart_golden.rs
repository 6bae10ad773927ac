//! Golden tests for the presentation chart.

use saju_base::{
    BirthInstant, BoundaryFacts, CalculatorConfig, Element, PillarPosition, SajuChart, Script,
    Sipsin, Stem, TwelveSpirit, TwelveStage, calculate_saju, transliterate,
};

fn chart(y: i32, m: u32, d: u32, h: u32, min: u32) -> SajuChart {
    let instant = BirthInstant::new(y, m, d, h, min).unwrap();
    let saju = calculate_saju(
        &instant,
        BoundaryFacts::new(true, true),
        &CalculatorConfig::default(),
    )
    .unwrap();
    SajuChart::from_saju(saju)
}

#[test]
fn reference_chart_columns() {
    // 丙子 癸巳 庚戌 己卯, day master 庚.
    let c = chart(1996, 5, 13, 5, 5);

    let year = c.column(PillarPosition::Year);
    assert_eq!(year.pillar.hangul(), "병자");
    assert_eq!(year.stem_sipsin, Some(Sipsin::Pyeongwan));
    // 子 principal 癸: 상관 from 庚.
    assert_eq!(year.branch_sipsin, Sipsin::Sanggwan);
    assert_eq!(year.twelve_stage, TwelveStage::Sa);
    assert_eq!(year.twelve_spirit, TwelveSpirit::Jangseongsal);

    let month = c.column(PillarPosition::Month);
    assert_eq!(month.stem_sipsin, Some(Sipsin::Sanggwan));
    assert_eq!(month.hidden_stems, vec![Stem::Mu, Stem::Gyeong, Stem::Byeong]);
    assert_eq!(month.twelve_stage, TwelveStage::Jangsaeng);

    let hour = c.column(PillarPosition::Hour);
    assert_eq!(hour.stem_sipsin, Some(Sipsin::Jeongin));
    assert_eq!(hour.branch_sipsin, Sipsin::Jeongjae);
    assert_eq!(hour.twelve_stage, TwelveStage::Tae);
}

#[test]
fn reference_chart_summary() {
    let c = chart(1996, 5, 13, 5, 5);
    assert_eq!(c.ohaeng, Element::Metal);
    assert_eq!(c.sipsin, Sipsin::Pyeongwan);
    assert_eq!(c.zodiac_animal, "쥐");
    let total: u8 = c.element_counts.iter().map(|(_, n)| n).sum();
    assert_eq!(total, 8);
}

#[test]
fn chart_json_shape() {
    let c = chart(1996, 5, 13, 5, 5);
    let json = serde_json::to_value(&c).unwrap();
    assert_eq!(json["columns"][2]["position"], "day");
    assert!(json["columns"][2]["stem_sipsin"].is_null());
    assert_eq!(json["columns"][0]["pillar"]["stem"], "丙");
    assert_eq!(json["ohaeng"], "metal");
    let back: SajuChart = serde_json::from_value(json).unwrap();
    assert_eq!(back, c);
}

#[test]
fn chart_pillars_in_hangul() {
    let c = chart(1988, 9, 17, 10, 30);
    let text = c
        .columns
        .iter()
        .map(|col| col.pillar.hanja())
        .collect::<Vec<_>>()
        .join(" ");
    assert_eq!(text, "戊辰 辛酉 乙亥 辛巳");
    assert_eq!(transliterate(&text, Script::Hangul), "무진 신유 을해 신사");
    assert_eq!(transliterate("무진 신유 을해 신사", Script::Hanja), text);
}
