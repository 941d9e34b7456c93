use std::time::Duration;

use criterion::criterion_group;
use criterion::criterion_main;
use criterion::Criterion;
use cloudreq_s3::{Credential, RequestSigner};
use cloudreq_core::Signer;

criterion_group!(benches, bench);
criterion_main!(benches);

fn request() -> http::request::Parts {
    http::Request::put("http://127.0.0.1:9000/bucket/hello?uploadId=1&partNumber=2")
        .header("Content-Type", "application/octet-stream")
        .header("x-amz-meta-owner", "bench")
        .body(())
        .expect("request must be valid")
        .into_parts()
        .0
}

pub fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("s3");

    let cred = Credential::new("access_key_id", "secret_access_key");
    let signer = Signer::new(RequestSigner::new());

    group.bench_function("sign", |b| {
        b.iter(|| signer.sign(request(), &cred).expect("must success"))
    });

    group.bench_function("presign", |b| {
        b.iter(|| {
            signer
                .presign(request(), &cred, Duration::from_secs(3600))
                .expect("must success")
        })
    });

    group.finish();
}
