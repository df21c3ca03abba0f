/// Text variants of the slideshow. They only differ in wording; the data,
/// charts and tally are the same for all of them.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeckVariant {
    /// Short introduction with a caption line
    Classic,

    /// Reworded edition with chart titles and a closing thank-you
    Revised,

    /// Long-form blog edition with a fuller formula note and closing remark
    Blog,
}

/// Every piece of wording that changes between variants.
#[derive(Debug, Clone)]
pub struct DeckText {
    pub title: &'static str,
    pub caption: Option<&'static str>,
    pub intro_heading: &'static str,
    pub intro: &'static str,
    pub image_heading: &'static str,
    pub image_url: &'static str,
    pub image_caption: &'static str,
    pub audio_heading: &'static str,
    pub video_heading: &'static str,
    pub formula_heading: &'static str,
    pub formula_note: &'static str,
    pub table_heading: &'static str,
    pub bar_heading: &'static str,
    pub bar_title: &'static str,
    pub pie_heading: &'static str,
    pub pie_title: &'static str,
    pub line_heading: &'static str,
    pub line_title: &'static str,
    pub line_x_label: &'static str,
    pub line_y_label: &'static str,
    pub code_heading: &'static str,
    pub echo_heading: &'static str,
    pub result_label: &'static str,
    pub callout_heading: &'static str,
    /// info, success, warning, error
    pub callouts: [&'static str; 4],
    pub closing: Option<&'static str>,
}

pub const AUDIO_URL: &str = "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-1.mp3";
pub const VIDEO_URL: &str = "https://www.youtube.com/watch?v=2pp17E4E-O8";
const DNA_IMAGE_URL: &str =
    "https://cdn.pixabay.com/photo/2016/03/31/19/14/dna-1295561_960_720.png";

impl DeckVariant {
    pub fn text(&self) -> DeckText {
        match self {
            DeckVariant::Classic => DeckText {
                title: "🧬 생명공학에 대해",
                caption: Some("생명공학 입문 슬라이드"),
                intro_heading: "생명공학이란?",
                intro: "생명공학(Biotechnology)은 생물학의 원리를 응용하여 인류의 삶을 개선하는 기술입니다.\n\
                        주요 예시로는 유전자 편집, 백신, 인공 장기 등이 있습니다.",
                image_heading: "DNA 구조",
                image_url: DNA_IMAGE_URL,
                image_caption: "DNA 이중 나선",
                audio_heading: "📢 유전자 편집 기술 소개 (오디오)",
                video_heading: "🎥 유전자 가위 CRISPR 소개",
                formula_heading: "E = mc^2 공식",
                formula_note: "세포 내 에너지 전환은 생명 활동에 필수입니다.",
                table_heading: "📊 생명공학 기술별 성장률",
                bar_heading: "기술별 성장률 막대 차트",
                bar_title: "2022년 vs 2025년 성장률",
                pie_heading: "원형 차트",
                pie_title: "2025년 예상 시장 점유율",
                line_heading: "ATP 생성 시뮬레이션",
                line_title: "ATP 생성량 변화",
                line_x_label: "시간 (시)",
                line_y_label: "ATP",
                code_heading: "🧬 DNA 염기 수 세기",
                echo_heading: "코드 실행 예시",
                result_label: "염기 수 결과:",
                callout_heading: "💡 생명공학 정보",
                callouts: [
                    "유전자 편집 기술은 질병 치료에 혁신을 가져올 수 있습니다.",
                    "세포 치료제는 많은 환자에게 희망이 됩니다.",
                    "생명공학 기술은 윤리적 문제도 함께 고려해야 합니다.",
                    "일부 기술은 안전성 검증이 부족합니다.",
                ],
                closing: None,
            },
            DeckVariant::Revised => DeckText {
                title: "🧬 생명공학에 대하여",
                caption: None,
                intro_heading: "생명공학이란?",
                intro: "생명공학(Biotechnology)은 생명체의 기능을 응용해 다양한 문제를 해결하는 과학 기술입니다.\n\
                        유전자 편집, 인공 장기, 백신 개발, 식물 개량 등 다양한 분야에 사용됩니다.",
                image_heading: "DNA 구조",
                image_url: "https://cdn.ck12.org/media/02/09/02-09-06-10-dnarep.png",
                image_caption: "DNA 복제 구조 (교육용)",
                audio_heading: "📢 유전자 편집 소개 오디오",
                video_heading: "🎥 유전자 가위 CRISPR 영상",
                formula_heading: "생명 에너지 공식",
                formula_note: "세포 내 에너지 전환은 생명 활동에 필수적인 과정입니다.",
                table_heading: "📊 생명공학 기술별 성장률 비교",
                bar_heading: "기술별 성장률",
                bar_title: "2022년 vs 2025년 기술 성장률",
                pie_heading: "2025년 예상 점유율 (원형 차트)",
                pie_title: "2025년 기술별 점유율",
                line_heading: "ATP 생성 시뮬레이션",
                line_title: "ATP 생성량 변화",
                line_x_label: "시간 (시)",
                line_y_label: "ATP 농도",
                code_heading: "🧬 DNA 염기 수 세기 예제 코드",
                echo_heading: "코드 실행 결과",
                result_label: "염기 수 결과:",
                callout_heading: "💬 생명공학 기술 주의사항",
                callouts: [
                    "유전자 편집은 질병 치료에 획기적인 발전을 이끌 수 있습니다.",
                    "백신 플랫폼은 팬데믹 대응에 큰 기여를 했습니다.",
                    "기술 남용은 윤리적 논란을 불러일으킬 수 있습니다.",
                    "일부 기술은 아직 충분한 안전성 검증이 이루어지지 않았습니다.",
                ],
                closing: Some("📚 감사합니다!"),
            },
            DeckVariant::Blog => DeckText {
                title: "🧬 생명공학에 대하여",
                caption: Some("생명공학 블로그"),
                intro_heading: "생명공학이란?",
                intro: "생명공학(Biotechnology)은 생명체의 기능을 응용하여 인류에 도움이 되는 제품과 기술을 개발하는 학문입니다.\n\
                        대표적으로 유전자 편집, 백신 개발, 조직 재생, 바이오 연료 등이 포함됩니다.",
                image_heading: "DNA 구조",
                image_url: DNA_IMAGE_URL,
                image_caption: "DNA 이중 나선 구조",
                audio_heading: "📢 유전자 편집 기술 (오디오 설명)",
                video_heading: "🎥 유전자 가위 CRISPR",
                formula_heading: "🔬 생명공학에서 에너지 계산",
                formula_note: "이 수식은 알버트 아인슈타인의 질량-에너지 등가 공식입니다.\n\
                               세포 수준에서도 에너지 전환은 중요한 생명 현상입니다.\n\
                               예: ATP 생성",
                table_heading: "생명공학 기술별 시장 성장률",
                bar_heading: "📊 기술별 성장 비교",
                bar_title: "2022년 vs 2025년 성장률",
                pie_heading: "🧪 2025 예상 시장 비율",
                pie_title: "2025년 예상 시장 점유율",
                line_heading: "⚙️ ATP 생성량 시뮬레이션",
                line_title: "시간에 따른 ATP 생성량 변화",
                line_x_label: "시간 (h)",
                line_y_label: "ATP (단위)",
                code_heading: "🧬 DNA 염기 수 세기 예제",
                echo_heading: "🔍 DNA 분석 코드 실행 예시",
                result_label: "염기 수:",
                callout_heading: "📌 생명공학 정보 콜아웃",
                callouts: [
                    "유전자 편집은 특정 유전자를 정밀하게 교정할 수 있는 기술입니다.",
                    "코로나19 백신은 mRNA 기반 생명공학의 대표 사례입니다.",
                    "CRISPR 기술은 윤리적 문제도 함께 고려되어야 합니다.",
                    "동물 실험 실패로 인해 임상시험이 지연되었습니다.",
                ],
                closing: Some("이 블로그는 **저의 관심 분야인 생명공학에 대해 소개하는 블로그입니다**"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DeckVariant;
    use clap::ValueEnum;

    #[test]
    fn every_variant_has_text() {
        for v in DeckVariant::value_variants() {
            let text = v.text();
            assert!(!text.title.is_empty());
            assert!(text.callouts.iter().all(|c| !c.is_empty()));
        }
    }

    #[test]
    fn variants_differ_in_wording() {
        let a = DeckVariant::Classic.text();
        let b = DeckVariant::Revised.text();
        assert_ne!(a.intro, b.intro);
        assert_ne!(a.callouts, b.callouts);
    }
}
