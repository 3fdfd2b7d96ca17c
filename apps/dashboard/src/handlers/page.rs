//! The server-rendered shell at `GET /`.
//!
//! One static page: metric tiles, the filter bar, the product table and a
//! per-category chart, all fed by the JSON endpoints. No template engine -
//! the page is a fixed document and the data arrives over `/api`.

use axum::response::Html;

/// `GET /` - the dashboard page.
pub async fn index() -> Html<&'static str> {
    Html(PAGE)
}

const PAGE: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Stockroom Dashboard</title>
<style>
  body { font-family: system-ui, sans-serif; margin: 0; color: #1c2733; background: #f5f6f8; }
  header { background: #203040; color: #fff; padding: 0.8rem 1.5rem; }
  header h1 { font-size: 1.2rem; margin: 0; }
  main { padding: 1.5rem; max-width: 1100px; margin: 0 auto; }
  .tiles { display: flex; gap: 1rem; flex-wrap: wrap; margin-bottom: 1.5rem; }
  .tile { background: #fff; border-radius: 8px; padding: 0.9rem 1.2rem; box-shadow: 0 1px 3px rgba(0,0,0,.08); min-width: 160px; }
  .tile .value { font-size: 1.5rem; font-weight: 600; }
  .tile .label { color: #5b6b7b; font-size: 0.8rem; }
  form.filters { display: flex; gap: 0.6rem; flex-wrap: wrap; margin-bottom: 1rem; align-items: end; }
  form.filters label { display: flex; flex-direction: column; font-size: 0.75rem; color: #5b6b7b; }
  form.filters input, form.filters select { padding: 0.3rem 0.4rem; }
  table { width: 100%; border-collapse: collapse; background: #fff; border-radius: 8px; overflow: hidden; }
  th, td { text-align: left; padding: 0.5rem 0.8rem; border-bottom: 1px solid #e8ebee; font-size: 0.9rem; }
  th { background: #eef1f4; }
  tr.low td { background: #fdeaea; }
  .chart { margin-top: 1.5rem; background: #fff; border-radius: 8px; padding: 1rem; }
  .bar { display: flex; align-items: center; gap: 0.5rem; margin: 0.3rem 0; }
  .bar .fill { background: #3572b0; height: 1.1rem; border-radius: 3px; }
  .bar .name { width: 10rem; font-size: 0.8rem; }
  .bar .count { font-size: 0.8rem; color: #5b6b7b; }
  a.export { font-size: 0.85rem; }
</style>
</head>
<body>
<header><h1>📦 Stockroom Dashboard</h1></header>
<main>
  <div class="tiles">
    <div class="tile"><div class="value" id="t-units">–</div><div class="label">Total units</div></div>
    <div class="tile"><div class="value" id="t-value">–</div><div class="label">Stock value</div></div>
    <div class="tile"><div class="value" id="t-products">–</div><div class="label">Distinct products</div></div>
    <div class="tile"><div class="value" id="t-low">–</div><div class="label">Low stock (≤ 5)</div></div>
  </div>

  <form class="filters" id="filters">
    <label>Category <select name="category" id="f-category"><option value="">All</option></select></label>
    <label>Supplier <select name="supplier" id="f-supplier"><option value="">All</option></select></label>
    <label>Min price <input name="price_min" type="number" step="0.01" min="0"></label>
    <label>Max price <input name="price_max" type="number" step="0.01" min="0"></label>
    <label>Search <input name="search" type="text" placeholder="name contains…"></label>
    <label>Sort by <select name="sort">
      <option value="">—</option><option value="name">Name</option>
      <option value="price">Price</option><option value="quantity">Quantity</option>
    </select></label>
    <label>Order <select name="order"><option value="asc">Ascending</option><option value="desc">Descending</option></select></label>
    <button type="submit">Apply</button>
    <a class="export" id="export" href="/api/export.csv">⬇ CSV of this view</a>
  </form>

  <table>
    <thead><tr><th>Name</th><th>Category</th><th>Qty</th><th>Unit price</th><th>Supplier</th></tr></thead>
    <tbody id="rows"></tbody>
  </table>

  <div class="chart">
    <h3>Units by category</h3>
    <div id="bars"></div>
  </div>
</main>
<script>
  const form = document.getElementById('filters');

  function queryString() {
    const params = new URLSearchParams();
    for (const [key, value] of new FormData(form)) {
      if (value !== '') params.set(key, value);
    }
    return params.toString();
  }

  async function refresh() {
    const qs = queryString();
    document.getElementById('export').href = '/api/export.csv' + (qs ? '?' + qs : '');

    const products = await (await fetch('/api/products' + (qs ? '?' + qs : ''))).json();
    const rows = document.getElementById('rows');
    rows.innerHTML = '';
    for (const p of products) {
      const tr = document.createElement('tr');
      if (p.quantity <= 5) tr.className = 'low';
      tr.innerHTML = `<td>${p.name}</td><td>${p.category}</td><td>${p.quantity}</td>` +
        `<td>${p.unit_price.toFixed(2)}</td><td>${p.supplier ?? '—'}</td>`;
      rows.appendChild(tr);
    }

    const summary = await (await fetch('/api/summary')).json();
    document.getElementById('t-units').textContent = summary.total_units;
    document.getElementById('t-value').textContent = summary.total_value.toFixed(2);
    document.getElementById('t-products').textContent = summary.distinct_products;
    document.getElementById('t-low').textContent = summary.low_stock;

    const max = Math.max(1, ...summary.by_category.map(c => c.quantity));
    const bars = document.getElementById('bars');
    bars.innerHTML = '';
    for (const c of summary.by_category) {
      const bar = document.createElement('div');
      bar.className = 'bar';
      bar.innerHTML = `<span class="name">${c.category}</span>` +
        `<span class="fill" style="width:${(c.quantity / max) * 60}%"></span>` +
        `<span class="count">${c.quantity}</span>`;
      bars.appendChild(bar);
    }
  }

  async function loadFilterOptions() {
    const options = await (await fetch('/api/filters')).json();
    for (const c of options.categories) {
      document.getElementById('f-category').insertAdjacentHTML('beforeend', `<option>${c}</option>`);
    }
    for (const s of options.suppliers) {
      document.getElementById('f-supplier').insertAdjacentHTML('beforeend', `<option>${s}</option>`);
    }
  }

  form.addEventListener('submit', (event) => { event.preventDefault(); refresh(); });
  loadFilterOptions().then(refresh);
</script>
</body>
</html>
"#;
