use criterion::{criterion_group, criterion_main, Criterion, black_box};

use data_table_deps::specs::{ definition::ToolDefinition, listing };

fn sample_listing(files: usize) -> String {
    let mut page = String::from("<html><body><table class=\"bigtable\">\n");
    for i in 0..files {
        let ext = if i % 3 == 0 { "xml" } else { "txt" };
        page.push_str(&format!(
            "<tr class=\"fileline\"><td class=\"filename\"><a href=\"/repos/iuc/t/file/tip/f{i}.{ext}\">\
             <img src=\"/static/coal-file.png\" alt=\"file\"/> f{i}.{ext}</a></td><td class=\"size\">1 KiB</td></tr>\n"
        ));
    }
    page.push_str("</table></body></html>");
    page
}

fn sample_tool(params: usize) -> String {
    let mut xml = String::from("<?xml version=\"1.0\"?>\n<tool id=\"t\" name=\"t\"><inputs><section name=\"s\">");
    for i in 0..params {
        xml.push_str(&format!(
            "<conditional name=\"c{i}\"><param name=\"p{i}\" type=\"select\"><options from_data_table=\"table_{i}\"><filter type=\"sort_by\" column=\"2\"/></options></param></conditional>"
        ));
    }
    xml.push_str("</section></inputs></tool>");
    xml
}

fn bench_extract(c: &mut Criterion) {
    let page = sample_listing(300);
    let tool = sample_tool(200);

    c.bench_function("listing_300_cells", |b| {
        b.iter(|| {
            let paths = listing::extract_definition_paths(black_box(&page), "bench").unwrap();
            black_box(paths.len())
        })
    });

    c.bench_function("definition_200_options", |b| {
        b.iter(|| {
            let def = ToolDefinition::parse(black_box(&tool), "bench").unwrap();
            black_box(def.data_tables.len())
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
