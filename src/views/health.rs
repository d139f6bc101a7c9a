pub fn health_html() -> &'static str {
    r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>NetProbe Health</title>
    <link href="/web/css/theme.css" rel="stylesheet">
  </head>
  <body>
    <div class="container">
      <div class="panel">
        <h1>NetProbe</h1>
        <p class="muted">Status: ok</p>
        <label class="muted" for="domain">Domain</label>
        <input class="form-control" id="domain" type="text" value="example.com">
        <button class="query-btn" id="lookup">Lookup</button>
        <h2>Result</h2>
        <pre class="log" id="output">Waiting for input.</pre>
      </div>
    </div>
    <script>
      const button = document.getElementById('lookup');
      const output = document.getElementById('output');
      button.addEventListener('click', async () => {
        output.textContent = 'Querying...';
        const domain = document.getElementById('domain').value;
        try {
          const response = await fetch('/dig', {
            method: 'POST',
            headers: { 'Content-Type': 'application/x-www-form-urlencoded' },
            body: new URLSearchParams({ domain, record_type: 'A' })
          });
          const data = await response.json();
          output.textContent = JSON.stringify(data, null, 2);
        } catch (error) {
          output.textContent = 'Error: ' + error;
        }
      });
    </script>
  </body>
</html>
"#
}
