use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use zconv::{convert_str, Format};

const JSON: &str = r#"{"service": {"name": "api", "port": 8080, "tags": ["a", "b", "c"], "limits": {"cpu": 0.5, "memory": 512}}}"#;
const YAML: &str = "service:\n  name: api\n  port: 8080\n  tags:\n  - a\n  - b\n  - c\n";
const XML: &str = r#"<service id="1"><name>api</name><port>8080</port><tags><item>a</item><item>b</item></tags></service>"#;

fn bench_from_json(c: &mut Criterion) {
    c.bench_function("json_to_yaml", |b| {
        b.iter(|| convert_str(black_box(JSON), Format::Json, Format::Yaml))
    });

    c.bench_function("json_to_xml", |b| {
        b.iter(|| convert_str(black_box(JSON), Format::Json, Format::Xml))
    });
}

fn bench_from_yaml(c: &mut Criterion) {
    c.bench_function("yaml_to_json", |b| {
        b.iter(|| convert_str(black_box(YAML), Format::Yaml, Format::Json))
    });
}

fn bench_from_xml(c: &mut Criterion) {
    c.bench_function("xml_to_json", |b| {
        b.iter(|| convert_str(black_box(XML), Format::Xml, Format::Json))
    });

    c.bench_function("xml_to_yaml", |b| {
        b.iter(|| convert_str(black_box(XML), Format::Xml, Format::Yaml))
    });
}

criterion_group!(benches, bench_from_json, bench_from_yaml, bench_from_xml);
criterion_main!(benches);
