use crate::views::layout::render_layout;

pub fn render_index_page() -> String {
    let content = r#"<div class="tool-tabs">
          <button class="tab-btn active" type="button" data-tool="dns">DNS Lookup</button>
          <button class="tab-btn" type="button" data-tool="curl">HTTP Request</button>
        </div>

        <form class="tool-form active" id="digForm" data-tool="dns">
          <div class="form-group">
            <label for="domain">Domain</label>
            <input class="form-control" id="domain" name="domain" type="text" placeholder="example.com" required>
          </div>
          <div class="form-row">
            <div class="form-group">
              <label for="record_type">Record type</label>
              <select class="form-control" id="record_type" name="record_type">
                <option value="A" selected>A</option>
                <option value="AAAA">AAAA</option>
                <option value="CNAME">CNAME</option>
                <option value="MX">MX</option>
                <option value="NS">NS</option>
                <option value="TXT">TXT</option>
                <option value="SOA">SOA</option>
                <option value="PTR">PTR</option>
                <option value="SRV">SRV</option>
                <option value="CAA">CAA</option>
              </select>
            </div>
            <div class="form-group">
              <label for="server">Name server</label>
              <select class="form-control" id="server" name="server">
                <option value="8.8.8.8:53" selected>Google (8.8.8.8)</option>
                <option value="1.1.1.1:53">Cloudflare (1.1.1.1)</option>
                <option value="9.9.9.9:53">Quad9 (9.9.9.9)</option>
                <option value="223.5.5.5:53">AliDNS (223.5.5.5)</option>
                <option value="custom">Custom…</option>
              </select>
            </div>
          </div>
          <div class="form-group" id="customServerGroup" style="display: none;">
            <label for="customServer">Custom server</label>
            <input class="form-control" id="customServer" type="text" placeholder="10.0.0.1:53">
          </div>
          <button class="query-btn" type="submit"><span class="btn-text">Query</span></button>
        </form>

        <form class="tool-form" id="curlForm" data-tool="curl">
          <div class="form-row">
            <div class="form-group form-group-method">
              <label for="method">Method</label>
              <select class="form-control" id="method" name="method">
                <option value="GET" selected>GET</option>
                <option value="POST">POST</option>
                <option value="PUT">PUT</option>
                <option value="DELETE">DELETE</option>
                <option value="PATCH">PATCH</option>
                <option value="HEAD">HEAD</option>
                <option value="OPTIONS">OPTIONS</option>
              </select>
            </div>
            <div class="form-group form-group-url">
              <label for="url">URL</label>
              <input class="form-control" id="url" name="url" type="text" placeholder="https://example.com">
            </div>
          </div>
          <div class="form-group">
            <label for="headers_json">Headers (JSON object)</label>
            <textarea class="form-control" id="headers_json" name="headers_json" rows="2" placeholder='{"Accept": "application/json"}'></textarea>
          </div>
          <div class="form-group">
            <label for="body">Body</label>
            <textarea class="form-control" id="body" name="body" rows="3"></textarea>
          </div>
          <div class="form-row form-row-options">
            <label class="check-label"><input type="checkbox" name="follow_redirect" checked> Follow redirects</label>
            <label class="check-label"><input type="checkbox" name="verify_tls" checked> Verify TLS</label>
            <label class="check-label"><input type="checkbox" name="head_only"> Headers only</label>
            <div class="form-group form-group-timeout">
              <label for="timeout">Timeout (s)</label>
              <input class="form-control" id="timeout" name="timeout" type="number" value="30" min="1">
            </div>
          </div>
          <div class="form-group">
            <label for="curl_command">Or paste a curl command</label>
            <textarea class="form-control" id="curl_command" name="curl_command" rows="2" placeholder="curl -I https://example.com"></textarea>
          </div>
          <button class="query-btn" type="submit"><span class="btn-text">Send request</span></button>
        </form>

        <div class="result-panel">
          <div class="empty-state" id="emptyState"><p>Run a query to see results here.</p></div>
          <div class="loading" id="loading" style="display: none;"><div class="spinner"></div></div>
          <div id="results"></div>
        </div>

        <script src="/web/js/app.js"></script>"#;

    render_layout("NetProbe", content)
}
