use axum::{http::StatusCode, response::Html};

/// Input box that sends every keystroke over the `puzzle` socket and shows
/// the reply underneath.
const HOME_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
<title>Unscrambler</title>
<script type="text/javascript">
var input, output, sock;
function init() {
  input = document.getElementById('query');
  output = document.getElementById('results');
  var scheme = window.location.protocol === 'https:' ? 'wss://' : 'ws://';
  sock = new WebSocket(scheme + window.location.host + '/puzzle', 'puzzle');
  sock.onmessage = function (evt) { output.innerText = evt.data; };
}
function send() {
  if (sock.readyState === WebSocket.OPEN) { sock.send(input.value); }
}
window.addEventListener('load', init, false);
</script>
</head>
<body>
<h1>Unscrambler</h1>
<p><input type="text" id="query" size="32" maxlength="64" onkeyup="send()" placeholder="Enter letters..."></p>
<pre id="results"></pre>
</body>
</html>
"#;

pub async fn home_page() -> Html<&'static str> {
    Html(HOME_PAGE)
}

pub async fn favicon() -> StatusCode {
    StatusCode::NO_CONTENT
}
