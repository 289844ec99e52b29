use axum::response::Html;

// the form only builds the manifest link client side, nothing gets posted back to us
const CONFIGURE_PAGE: &str = r#"<!DOCTYPE html>
<html lang="it">
<head>
  <meta charset="UTF-8">
  <title>Configura MediaFlow Proxy</title>
  <style>
    body { font-family: Arial, sans-serif; margin: 2em; }
    input { width: 100%; padding: 8px; margin-top: 8px; }
    button { padding: 10px; margin-top: 12px; }
  </style>
</head>
<body>
  <h1>Configura MediaFlow Proxy</h1>
  <form id="configForm">
    <input type="text" id="mediaflowUrl" placeholder="Inserisci URL completo (https://...)" required>
    <input type="text" id="mediaflowPassword" placeholder="Inserisci la password" required>
    <button type="submit">Genera Link Manifest</button>
  </form>
  <input type="text" id="manifestLink" readonly style="margin-top:20px;">
  <script>
    document.getElementById('configForm').addEventListener('submit', function (e) {
      e.preventDefault();
      var url = document.getElementById('mediaflowUrl').value.trim();
      var password = document.getElementById('mediaflowPassword').value.trim();
      document.getElementById('manifestLink').value = window.location.origin
        + '/mfp/' + encodeURIComponent(url)
        + '/PSW/' + encodeURIComponent(password)
        + '/manifest.json';
    });
  </script>
</body>
</html>
"#;

pub async fn home_page() -> Html<&'static str> {
    Html(CONFIGURE_PAGE)
}
