const IMAGE_ONLY_INSTRUCTION: &str = "You are a professional doctor. Based on the image, suggest the most likely medical condition and a suitable remedy. \
Do not include any preamble or special characters. Do not say 'I see' or 'As an AI'. \
Start directly with the diagnosis. Keep the response realistic and human-like in tone. \
Use no more than two sentences.";

const SYMPTOM_TEXT_INSTRUCTION: &str = "You are a professional doctor. Based on the symptoms described below, give a concise diagnosis and remedy. \
Do not include any preamble or special characters. Start the answer immediately with the condition. \
Respond like a human doctor would speak, not an AI. Limit your response to two sentences only.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptTemplate {
    ImageOnly,
    SymptomText,
}

impl PromptTemplate {
    /// The image-only template applies only when the transcript is exactly empty and an image is present.
    pub fn select(transcript: &str, has_image: bool) -> Self {
        if transcript.is_empty() && has_image {
            Self::ImageOnly
        } else {
            Self::SymptomText
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ImageOnly => "image_only",
            Self::SymptomText => "symptom_text",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosisPrompt {
    pub template: PromptTemplate,
    pub instruction: String,
}

impl DiagnosisPrompt {
    pub fn build(transcript: &str, has_image: bool) -> Self {
        let template = PromptTemplate::select(transcript, has_image);
        let instruction = match template {
            PromptTemplate::ImageOnly => IMAGE_ONLY_INSTRUCTION.to_string(),
            PromptTemplate::SymptomText => format!("{}\n\n{}", SYMPTOM_TEXT_INSTRUCTION, transcript),
        };
        Self {
            template,
            instruction,
        }
    }
}
