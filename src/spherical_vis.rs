use bevy::{
    prelude::*,
    reflect::TypeUuid,
    render::{
        mesh,
        pipeline::{PipelineDescriptor, PrimitiveTopology::TriangleList, RenderPipeline},
        render_graph::{base, AssetRenderResourcesNode, RenderGraph},
        renderer::RenderResources,
        shader::{ShaderStage, ShaderStages},
    },
};
use bevy_orbit_controls::{OrbitCamera, OrbitCameraPlugin};

use crate::{geodesic_polyhedron::vertex_generation, mesh::Mesh as GeodesicMesh};

#[derive(RenderResources, Default, TypeUuid)]
#[uuid = "6a1f3e52-93c4-4b0e-9d7a-2f5c8e1b4a70"]
struct VertexColorMaterial;

// The render mesh handed to the startup system
struct ViewedMesh(Mesh);

const VERTEX_SHADER: &str = r#"
#version 450
layout(location = 0) in vec3 Vertex_Position;
layout(location = 1) in vec3 Vertex_Color;
layout(location = 0) out vec3 v_color;
layout(set = 0, binding = 0) uniform CameraViewProj {
    mat4 ViewProj;
};
layout(set = 1, binding = 0) uniform Transform {
    mat4 Model;
};
void main() {
    gl_Position = ViewProj * Model * vec4(Vertex_Position, 1.0);
    v_color = Vertex_Color;
}
"#;

const FRAGMENT_SHADER: &str = r#"
#version 450
layout(location = 0) out vec4 o_Target;
layout(location = 0) in vec3 v_color;
void main() {
    o_Target = vec4(v_color, 1.0);
}
"#;

// Colours run from red for the icosahedron vertices to green for those added in the last round.
fn generation_colors(geodesic: &GeodesicMesh) -> Vec<[f32; 3]> {
    let last = vertex_generation(geodesic.vertex_count().saturating_sub(1)).max(1) as f32;
    (0..geodesic.vertex_count())
        .map(|i| {
            let x = vertex_generation(i) as f32 / last;
            [1. - x, x, 0.]
        })
        .collect()
}

fn render_mesh(geodesic: &GeodesicMesh) -> Mesh {
    let verts: Vec<_> = geodesic
        .vertices
        .iter()
        .map(|x| [x[0] as f32, x[1] as f32, x[2] as f32])
        .collect();

    let indices = geodesic
        .faces
        .iter()
        .flat_map(|x| [x.0 as u32, x.1 as u32, x.2 as u32])
        .collect();

    let mut out = Mesh::new(TriangleList);
    out.set_attribute(Mesh::ATTRIBUTE_POSITION, verts);
    out.set_attribute("Vertex_Color", generation_colors(geodesic));
    out.set_indices(Some(mesh::Indices::U32(indices)));
    out
}

fn setup(
    viewed: Res<ViewedMesh>,
    mut commands: Commands,
    mut pipelines: ResMut<Assets<PipelineDescriptor>>,
    mut shaders: ResMut<Assets<Shader>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<VertexColorMaterial>>,
    mut render_graph: ResMut<RenderGraph>,
) {
    let pipeline_handle = pipelines.add(PipelineDescriptor::default_config(ShaderStages {
        vertex: shaders.add(Shader::from_glsl(ShaderStage::Vertex, VERTEX_SHADER)),
        fragment: Some(shaders.add(Shader::from_glsl(ShaderStage::Fragment, FRAGMENT_SHADER))),
    }));

    // Binds VertexColorMaterial resources to the shader, ahead of the main pass
    render_graph.add_system_node(
        "vertex_color_material",
        AssetRenderResourcesNode::<VertexColorMaterial>::new(true),
    );
    if let Err(err) = render_graph.add_node_edge("vertex_color_material", base::node::MAIN_PASS) {
        tracing::error!("Failed to wire the vertex colour node: {:?}", err);
        return;
    }

    let material = materials.add(VertexColorMaterial {});

    commands
        .spawn_bundle(MeshBundle {
            mesh: meshes.add(viewed.0.clone()),
            render_pipelines: RenderPipelines::from_pipelines(vec![RenderPipeline::new(
                pipeline_handle,
            )]),
            // z up in the mesh, y up in bevy
            transform: Transform::from_matrix(Mat4::from_cols(
                Vec4::new(1., 0., 0., 0.),
                Vec4::new(0., 0., 1., 0.),
                Vec4::new(0., 1., 0., 0.),
                Vec4::new(0., 0., 0., 1.),
            )),
            ..Default::default()
        })
        .insert(material);
    // camera
    commands
        .spawn_bundle(PerspectiveCameraBundle {
            transform: Transform::from_xyz(3., 0.0, 0.0).looking_at(Vec3::ZERO, Vec3::Y),
            ..Default::default()
        })
        .insert(OrbitCamera::default());
}

pub fn run(geodesic: &GeodesicMesh) {
    App::build()
        .add_plugins(DefaultPlugins)
        .add_plugin(OrbitCameraPlugin)
        .add_asset::<VertexColorMaterial>()
        .insert_resource(ViewedMesh(render_mesh(geodesic)))
        .add_startup_system(setup.system())
        .run();
}
