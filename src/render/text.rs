use crate::record::Festival;

/// One-line summary of a decoded record.
///
/// Example:
/// 春节 in 12 day(s) [农历节日 / lunar]
pub fn render_summary(festival: &Festival) -> String {
    if festival.is_none() {
        return "no upcoming festival".to_string();
    }

    let kind = match festival.classify() {
        Some(k) => format!("{} / {}", k.label(), kind_slug(k)),
        None if festival.kind_label().is_empty() => "untyped".to_string(),
        None => festival.kind_label().to_string(),
    };

    let when = match festival.days() {
        0 => "today".to_string(),
        d if d < 0 => format!("{} day(s) ago", d.unsigned_abs()),
        d => format!("in {} day(s)", d),
    };

    format!("{} {} [{}]", festival.name(), when, kind)
}

fn kind_slug(kind: crate::record::FestivalKind) -> &'static str {
    use crate::record::FestivalKind::*;
    match kind {
        Solar => "solar",
        Lunar => "lunar",
        SolarTerm => "solar term",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::FestivalKind;

    #[test]
    fn renders_known_kind() {
        let f = Festival::of_kind("春节", 12, FestivalKind::Lunar);
        assert_eq!(render_summary(&f), "春节 in 12 day(s) [农历节日 / lunar]");
    }

    #[test]
    fn renders_sentinel_and_edge_days() {
        assert_eq!(render_summary(&Festival::none()), "no upcoming festival");
        assert_eq!(
            render_summary(&Festival::new("Riverfest", 0, "music")),
            "Riverfest today [music]"
        );
        assert_eq!(
            render_summary(&Festival::new("x", -2, "")),
            "x 2 day(s) ago [untyped]"
        );
    }
}
