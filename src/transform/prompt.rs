//! Prompt construction for the three transformation services.
//!
//! [`PromptSpec`] holds the role statement, behavioural rules, the JSON output
//! field name, and the few-shot example pairs for one [`ServiceType`].  The
//! spec is selected by an exhaustive `match` on the variant, so every
//! recognised service is guaranteed a non-empty, direction-correct example
//! block.  [`PromptSpec::render`] turns the spec into the single instruction
//! string sent ahead of the user's text.
//!
//! Instructions are written in Turkish, matching the application's audience;
//! the translation variants state the required output language in their rules.

use crate::transform::ServiceType;

/// The single JSON key the model must wrap its output in.
pub const OUTPUT_FIELD: &str = "result";

// ---------------------------------------------------------------------------
// Role statements
// ---------------------------------------------------------------------------

const ROLE_CORRECTION: &str = "Sen bir Türkçe metin düzeltme uzmanısın. \
Görevin verilen metindeki noktalama, imla, kelime ve büyük/küçük harf \
hatalarını düzeltmek.";

const ROLE_TO_ENGLISH: &str = "Sen profesyonel bir Türkçe-İngilizce \
çevirmensin. Görevin verilen Türkçe metni doğal ve akıcı İngilizce'ye \
çevirmek.";

const ROLE_TO_TURKISH: &str = "Sen profesyonel bir İngilizce-Türkçe \
çevirmensin. Görevin verilen İngilizce metni doğal ve akıcı Türkçe'ye \
çevirmek.";

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

const RULES_CORRECTION: &[&str] = &[
    "Noktalama hatalarını düzelt (virgül, nokta, soru işareti, ünlem işareti)",
    "İmla ve yazım yanlışlarını düzelt",
    "Yanlış kelime kullanımlarını düzelt",
    "Büyük/küçük harf hatalarını düzelt (cümle başı, özel isimler)",
    "Metnin orijinal yapısını KORU — paragraf yapısı ve satır sonları bozulmamalı",
    "Anlamı değiştirme, sadece yukarıdaki hataları düzelt",
    "Cevap MUTLAKA Türkçe olmalı",
];

const RULES_TO_ENGLISH: &[&str] = &[
    "Metnin anlamını eksiksiz ve doğru aktar",
    "Metnin orijinal yapısını KORU — paragraf yapısı ve satır sonları bozulmamalı",
    "Özel isimleri ve teknik terimleri olduğu gibi bırak",
    "Cevap MUTLAKA İngilizce olmalı",
];

const RULES_TO_TURKISH: &[&str] = &[
    "Metnin anlamını eksiksiz ve doğru aktar",
    "Metnin orijinal yapısını KORU — paragraf yapısı ve satır sonları bozulmamalı",
    "Özel isimleri ve teknik terimleri olduğu gibi bırak",
    "Cevap MUTLAKA Türkçe olmalı",
];

// ---------------------------------------------------------------------------
// Few-shot examples  (input, expected output)
// ---------------------------------------------------------------------------

const EXAMPLES_CORRECTION: &[(&str, &str)] = &[
    ("merhaba nasılsın iyimisin", "Merhaba, nasılsın? İyi misin?"),
    (
        "bugün hava çok guzel arkadaslarla parka gittik",
        "Bugün hava çok güzel. Arkadaşlarla parka gittik.",
    ),
    (
        "ankaraya taşınacazım yeni işim yüzünden",
        "Ankara'ya taşınacağım, yeni işim yüzünden.",
    ),
];

const EXAMPLES_TO_ENGLISH: &[(&str, &str)] = &[
    (
        "Bugün hava çok güzel, parka gidelim mi?",
        "The weather is lovely today, shall we go to the park?",
    ),
    (
        "Raporu yarın sabaha kadar bitirmem gerekiyor.",
        "I need to finish the report by tomorrow morning.",
    ),
];

const EXAMPLES_TO_TURKISH: &[(&str, &str)] = &[
    (
        "The meeting has been moved to Thursday afternoon.",
        "Toplantı perşembe öğleden sonraya alındı.",
    ),
    (
        "Could you send me the updated file?",
        "Güncellenmiş dosyayı bana gönderebilir misin?",
    ),
];

// ---------------------------------------------------------------------------
// PromptSpec
// ---------------------------------------------------------------------------

/// The fixed instructional content for one service.
///
/// Built by [`PromptSpec::for_service`]; pure data, recomputed per call.
#[derive(Debug, Clone, Copy)]
pub struct PromptSpec {
    /// Role statement opening the prompt.
    pub role: &'static str,
    /// Numbered behavioural rules.
    pub rules: &'static [&'static str],
    /// The single JSON key the model must answer with.
    pub json_field: &'static str,
    /// Worked examples in the service's direction.
    pub examples: &'static [(&'static str, &'static str)],
}

impl PromptSpec {
    /// Select the spec for `service`.
    ///
    /// The match is exhaustive over [`ServiceType`], so adding a variant
    /// without a spec is a compile error rather than an empty prompt.
    pub fn for_service(service: ServiceType) -> Self {
        match service {
            ServiceType::Correction => Self {
                role: ROLE_CORRECTION,
                rules: RULES_CORRECTION,
                json_field: OUTPUT_FIELD,
                examples: EXAMPLES_CORRECTION,
            },
            ServiceType::TranslateToEnglish => Self {
                role: ROLE_TO_ENGLISH,
                rules: RULES_TO_ENGLISH,
                json_field: OUTPUT_FIELD,
                examples: EXAMPLES_TO_ENGLISH,
            },
            ServiceType::TranslateToTurkish => Self {
                role: ROLE_TO_TURKISH,
                rules: RULES_TO_TURKISH,
                json_field: OUTPUT_FIELD,
                examples: EXAMPLES_TO_TURKISH,
            },
        }
    }

    /// Render the full instruction string sent ahead of the user's text.
    ///
    /// Structure (in order):
    /// 1. Role statement
    /// 2. Numbered rules
    /// 3. Mandatory single-key JSON output format
    /// 4. Worked examples
    /// 5. Final imperative: return only JSON
    pub fn render(&self) -> String {
        let mut prompt = String::with_capacity(2048);

        prompt.push_str(self.role);
        prompt.push_str("\n\nKURALLAR:\n");
        for (i, rule) in self.rules.iter().enumerate() {
            prompt.push_str(&format!("{}. {}\n", i + 1, rule));
        }

        prompt.push_str(&format!(
            "\nZORUNLU JSON FORMATI:\n{{\"{}\": \"buraya sonucu yaz\"}}\n",
            self.json_field
        ));

        prompt.push_str("\nÖRNEKLER:\n");
        for (input, output) in self.examples {
            prompt.push_str(&format!(
                "Girdi: \"{}\"\nCevap: {{\"{}\": \"{}\"}}\n\n",
                input, self.json_field, output
            ));
        }

        prompt.push_str(
            "ŞİMDİ KULLANICININ METNİNİ İŞLE VE SADECE JSON DÖNDÜR:",
        );
        prompt
    }
}

/// Convenience wrapper: render the prompt for `service` in one call.
pub fn build_prompt(service: ServiceType) -> String {
    PromptSpec::for_service(service).render()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_SERVICES: [ServiceType; 3] = [
        ServiceType::Correction,
        ServiceType::TranslateToEnglish,
        ServiceType::TranslateToTurkish,
    ];

    #[test]
    fn every_service_has_rules_and_examples() {
        for service in ALL_SERVICES {
            let spec = PromptSpec::for_service(service);
            assert!(!spec.role.is_empty(), "{service}: empty role");
            assert!(!spec.rules.is_empty(), "{service}: empty rules");
            assert!(!spec.examples.is_empty(), "{service}: empty examples");
            assert_eq!(spec.json_field, "result");
        }
    }

    #[test]
    fn example_blocks_are_distinct_per_service() {
        let correction = PromptSpec::for_service(ServiceType::Correction).examples;
        let to_en = PromptSpec::for_service(ServiceType::TranslateToEnglish).examples;
        let to_tr = PromptSpec::for_service(ServiceType::TranslateToTurkish).examples;

        assert_ne!(correction, to_en);
        assert_ne!(to_en, to_tr);
        assert_ne!(correction, to_tr);
    }

    #[test]
    fn rendered_prompt_contains_all_sections() {
        for service in ALL_SERVICES {
            let prompt = build_prompt(service);
            assert!(prompt.contains("KURALLAR:"), "{service}: rules header");
            assert!(prompt.contains("1. "), "{service}: numbered rules");
            assert!(
                prompt.contains("ZORUNLU JSON FORMATI:"),
                "{service}: JSON format section"
            );
            assert!(prompt.contains("\"result\""), "{service}: field name");
            assert!(prompt.contains("ÖRNEKLER:"), "{service}: examples header");
            assert!(
                prompt.contains("SADECE JSON DÖNDÜR"),
                "{service}: closing imperative"
            );
        }
    }

    #[test]
    fn correction_examples_stay_turkish() {
        let prompt = build_prompt(ServiceType::Correction);
        assert!(prompt.contains("merhaba nasılsın iyimisin"));
        assert!(prompt.contains("Merhaba, nasılsın? İyi misin?"));
    }

    #[test]
    fn translate_to_english_examples_point_the_right_way() {
        let spec = PromptSpec::for_service(ServiceType::TranslateToEnglish);
        // Inputs are Turkish, outputs English.
        let (input, output) = spec.examples[0];
        assert!(input.contains("güzel"));
        assert!(output.contains("weather"));
    }

    #[test]
    fn translate_to_turkish_examples_point_the_right_way() {
        let spec = PromptSpec::for_service(ServiceType::TranslateToTurkish);
        let (input, output) = spec.examples[0];
        assert!(input.contains("meeting"));
        assert!(output.contains("Toplantı"));
    }

    #[test]
    fn render_is_deterministic() {
        assert_eq!(
            build_prompt(ServiceType::Correction),
            build_prompt(ServiceType::Correction)
        );
    }
}
