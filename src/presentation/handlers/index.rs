use axum::response::Html;

use crate::domain::{DEFAULT_LANGUAGE_LABEL, LANGUAGE_CHOICES};

const INDEX_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Sanjeevani - Multilingual AI Doctor</title>
<style>
body { background: linear-gradient(145deg, #0f172a, #1e293b); color: white; font-family: 'Segoe UI', sans-serif; margin: 0; min-height: 100vh; }
h1 { text-align: center; color: #fcd34d; }
main { display: flex; flex-wrap: wrap; gap: 24px; justify-content: center; padding: 16px; }
section { background: #1e293b; border: 1px solid #334155; border-radius: 12px; padding: 20px; width: 420px; }
label { display: block; margin-top: 14px; font-weight: 600; }
textarea { width: 100%; min-height: 80px; background: #0f172a; color: white; border: 1px solid #334155; border-radius: 6px; }
button { margin-top: 16px; padding: 10px 18px; border: none; border-radius: 8px; background: #fcd34d; color: #0f172a; font-weight: 700; cursor: pointer; }
button:disabled { opacity: 0.6; cursor: wait; }
#error { color: #f87171; }
img.flowchart { max-width: 100%; background: white; border-radius: 8px; }
</style>
</head>
<body>
<h1>Sanjeevani - Multilingual AI Doctor</h1>
<main>
<section>
<form id="diagnose-form">
<label>Speak your concern</label>
<button type="button" id="record">Start recording</button>
<span id="record-status"></span>
<label for="audio">Or upload audio</label>
<input type="file" id="audio" name="audio" accept="audio/*">
<label for="image">Upload image (optional)</label>
<input type="file" id="image" name="image" accept="image/*">
<label for="text_file">Or upload symptom .txt</label>
<input type="file" id="text_file" name="text_file" accept=".txt,text/plain">
<label for="language">Response language</label>
<select id="language" name="language">
{{LANGUAGE_OPTIONS}}
</select>
<button type="submit" id="submit">Diagnose</button>
<p id="error"></p>
</form>
</section>
<section>
<label>Transcription</label>
<textarea id="transcript" readonly></textarea>
<label>Doctor's response</label>
<textarea id="advice" readonly></textarea>
<label>Voice response</label>
<audio id="voice" controls></audio>
<label>Report</label>
<a id="report" href="#" download hidden>Download TXT report</a>
<label>Flowchart</label>
<img id="flowchart" class="flowchart" alt="" hidden>
</section>
</main>
<script>
let recorder = null;
let chunks = [];
let recording = null;

document.getElementById("record").addEventListener("click", async (event) => {
  const button = event.target;
  const status = document.getElementById("record-status");
  if (recorder && recorder.state === "recording") {
    recorder.stop();
    button.textContent = "Start recording";
    return;
  }
  try {
    const stream = await navigator.mediaDevices.getUserMedia({ audio: true });
    chunks = [];
    recorder = new MediaRecorder(stream);
    recorder.ondataavailable = (e) => chunks.push(e.data);
    recorder.onstop = () => {
      recording = new Blob(chunks, { type: recorder.mimeType || "audio/webm" });
      stream.getTracks().forEach((t) => t.stop());
      status.textContent = " recorded";
    };
    recorder.start();
    button.textContent = "Stop recording";
    status.textContent = " recording...";
  } catch (e) {
    status.textContent = " microphone unavailable";
  }
});

document.getElementById("diagnose-form").addEventListener("submit", async (event) => {
  event.preventDefault();
  const form = event.target;
  const submit = document.getElementById("submit");
  const error = document.getElementById("error");
  const data = new FormData(form);
  if (recording && !document.getElementById("audio").files.length) {
    const ext = recording.type.includes("ogg") ? "ogg" : "webm";
    data.set("audio", recording, "recording." + ext);
  }
  submit.disabled = true;
  error.textContent = "";
  try {
    const response = await fetch("/api/v1/diagnose", { method: "POST", body: data });
    const body = await response.json();
    if (!response.ok) {
      error.textContent = body.error || "Diagnosis failed";
      return;
    }
    document.getElementById("transcript").value = body.transcript;
    document.getElementById("advice").value = body.advice;
    const voice = document.getElementById("voice");
    voice.src = body.audio_url;
    voice.play().catch((e) => console.warn("Autoplay blocked by browser:", e));
    const report = document.getElementById("report");
    report.href = body.report_url;
    report.hidden = false;
    const flowchart = document.getElementById("flowchart");
    flowchart.src = body.flowchart_url;
    flowchart.hidden = false;
  } catch (e) {
    error.textContent = "Diagnosis failed";
  } finally {
    submit.disabled = false;
  }
});
</script>
</body>
</html>
"##;

pub fn render_index_page() -> String {
    let options = LANGUAGE_CHOICES
        .iter()
        .map(|(label, _)| {
            let selected = if *label == DEFAULT_LANGUAGE_LABEL {
                " selected"
            } else {
                ""
            };
            format!(r#"<option value="{label}"{selected}>{label}</option>"#)
        })
        .collect::<Vec<_>>()
        .join("\n");
    INDEX_TEMPLATE.replace("{{LANGUAGE_OPTIONS}}", &options)
}

pub async fn index_handler() -> Html<String> {
    Html(render_index_page())
}
